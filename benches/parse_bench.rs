use criterion::{criterion_group, criterion_main, Criterion};
use keylegend::translate::translate_binding;
use keylegend::{KeymapParser, NullSink};
use std::hint::black_box;

fn setup_keymap(layers: usize) -> String {
    let bindings = [
        "&kp Q", "&kp W", "&kp E", "&kp R", "&kp T", "&kp Y", "&kp U", "&kp I", "&kp O",
        "&kp P", "&mt LEFT_SHIFT A", "&kp S", "&kp D", "&kp F", "&kp G", "&kp H", "&kp J",
        "&kp K", "&kp L", "&kp SEMI", "&lt 5 Z", "&kp X", "&kp C", "&kp V", "&kp B",
        "&kp N", "&kp M", "&kp COMMA", "&kp DOT", "&kp LS(LG(S))", "&trans", "&mo 1",
        "&lt 2 SPACE", "&to 0", "&bt BT_SEL 0", "&mkp MB1",
    ];

    let mut out = String::from("/ {\n    keymap {\n        compatible = \"zmk,keymap\";\n");
    for i in 0..layers {
        out.push_str(&format!("        layer_{} {{\n            bindings = <\n", i));
        for row in bindings.chunks(10) {
            out.push_str(&row.join("  "));
            out.push('\n');
        }
        out.push_str("            >;\n        };\n");
    }
    out.push_str("    };\n};\n");
    out
}

fn criterion_benchmark(c: &mut Criterion) {
    let parser = KeymapParser::default();
    let small = setup_keymap(6);
    let large = setup_keymap(32);

    c.bench_function("parse (6 layers)", |b| {
        b.iter(|| parser.parse(black_box(&small), &mut NullSink))
    });

    c.bench_function("parse (32 layers)", |b| {
        b.iter(|| parser.parse(black_box(&large), &mut NullSink))
    });

    c.bench_function("translate_binding (nested modifiers)", |b| {
        b.iter(|| translate_binding(black_box("&kp LS(LC(LA(LG(DELETE))))")))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
