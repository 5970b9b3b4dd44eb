// benches/clean_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bdlocalflavor::{BdPhoneNumberField, BdPostCodeField, BdUpazilaSelect, ChoiceField, Field};

/// Phone inputs as users actually type them: bare, spaced, bracketed,
/// Bengali digits, and a couple that must be rejected.
fn setup_phone_data() -> Vec<&'static str> {
    vec![
        "01712345678",
        "(017) 123-45678",
        "880 1712 345678",
        "02-9556677",
        "০১৭১২৩৪৫৬৭৮",
        "+8801712345678",
        "1234567",
    ]
}

fn clean_benchmark(c: &mut Criterion) {
    let phones = setup_phone_data();
    let phone_field = BdPhoneNumberField::new();
    let ascii_phone_field = BdPhoneNumberField::new().ascii_digits(true);
    let post_code_field = BdPostCodeField::new();
    let upazila_field = ChoiceField::new(BdUpazilaSelect::new());

    let mut group = c.benchmark_group("Clean");

    group.bench_function("phone number", |b| {
        b.iter(|| {
            for phone in &phones {
                let _ = black_box(phone_field.clean(black_box(Some(phone))));
            }
        })
    });

    group.bench_function("phone number, ascii digits", |b| {
        b.iter(|| {
            for phone in &phones {
                let _ = black_box(ascii_phone_field.clean(black_box(Some(phone))));
            }
        })
    });

    group.bench_function("post code", |b| {
        b.iter(|| {
            for code in ["1207", "12070", "abcd"] {
                let _ = black_box(post_code_field.clean(black_box(Some(code))));
            }
        })
    });

    group.bench_function("upazila choice", |b| {
        b.iter(|| {
            // first, last and a miss in a 495 entry table
            for value in ["amtali", "zakiganj", "nowhere"] {
                let _ = black_box(upazila_field.clean(black_box(Some(value))));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, clean_benchmark);
criterion_main!(benches);
