use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifeboat::{FeatureSchema, LabelEncoder, LogisticModel, PassengerRecord, Predictor};
use std::sync::Arc;

fn setup_benchmark_predictor() -> Predictor {
    Predictor::builder()
        .with_model(Arc::new(
            LogisticModel::new(vec![-1.1, -2.6, -0.04, -0.36, -0.06, 0.002], 4.6, [0, 1])
                .unwrap(),
        ))
        .with_encoder(Arc::new(
            LabelEncoder::new(vec!["female".to_string(), "male".to_string()]).unwrap(),
        ))
        .with_schema(Arc::new(
            FeatureSchema::new(vec![
                "Pclass".to_string(),
                "Sex".to_string(),
                "Age".to_string(),
                "SibSp".to_string(),
                "Parch".to_string(),
                "Fare".to_string(),
            ])
            .unwrap(),
        ))
        .build()
        .unwrap()
}

fn bench_prediction(c: &mut Criterion) {
    let predictor = setup_benchmark_predictor();
    let mut group = c.benchmark_group("Prediction");

    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("predict_third_class_male", |b| {
        let record = PassengerRecord::new(3, "male", 25, 0, 0, 7.25);
        b.iter(|| predictor.predict(black_box(&record)).unwrap())
    });

    group.bench_function("predict_first_class_female", |b| {
        let record = PassengerRecord::new(1, "female", 5, 1, 2, 150.0);
        b.iter(|| predictor.predict(black_box(&record)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_prediction);
criterion_main!(benches);
