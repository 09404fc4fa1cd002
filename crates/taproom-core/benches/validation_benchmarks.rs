//! Benchmarks for the validators on the keystroke path
//!
//! Password strength and confirmation run on every input event, so they
//! should stay far below a frame budget even for long pastes.
//!
//! Copyright (c) 2025 Taproom Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use taproom_core::validation::field_validators::is_plausible_email;
use taproom_core::{
    calculate_password_strength, Field, FieldEvent, FieldKind, Form, FormValidator,
};

fn signup_form() -> Form {
    Form::new(vec![
        Field::new("username", FieldKind::Text).required(),
        Field::new("email", FieldKind::Email).required(),
        Field::new("password1", FieldKind::Password).required(),
        Field::new("password2", FieldKind::Password).required(),
    ])
}

fn bench_password_strength(c: &mut Criterion) {
    let mut group = c.benchmark_group("password_strength");

    for (name, password) in [
        ("empty", String::new()),
        ("weak", "abc".to_string()),
        ("strong", "Str0ng!Passw0rd".to_string()),
        ("long_paste", "aB3$".repeat(256)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &password, |b, password| {
            b.iter(|| calculate_password_strength(black_box(password)))
        });
    }

    group.finish();
}

fn bench_email(c: &mut Criterion) {
    let mut group = c.benchmark_group("email");

    group.bench_function("valid", |b| {
        b.iter(|| is_plausible_email(black_box("someone@example.com")))
    });
    group.bench_function("invalid", |b| {
        b.iter(|| is_plausible_email(black_box("someone at example dot com")))
    });

    group.finish();
}

fn bench_typing_session(c: &mut Criterion) {
    let password = "Correct-Horse-9";

    c.bench_function("typing_session", |b| {
        b.iter(|| {
            let mut validator = FormValidator::new(signup_form());
            for end in 1..=password.len() {
                validator
                    .dispatch(FieldEvent::input("password1", &password[..end]))
                    .unwrap();
            }
            for end in 1..=password.len() {
                validator
                    .dispatch(FieldEvent::input("password2", &password[..end]))
                    .unwrap();
            }
            validator
                .dispatch(FieldEvent::blur("email", "brewer@example.com"))
                .unwrap();
            black_box(validator.submit())
        })
    });
}

criterion_group!(
    benches,
    bench_password_strength,
    bench_email,
    bench_typing_session
);
criterion_main!(benches);
