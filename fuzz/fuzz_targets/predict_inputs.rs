#![no_main]

use inference::{Predictor, ReferencePoint, ReferenceSet, ScalerParams};
use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;

static PREDICTOR: Lazy<Predictor> = Lazy::new(|| {
    let scaler = ScalerParams {
        artifact_id: "fuzz-scaler".to_string(),
        mean: vec![3_500_000.0, 636.0, 9.5, 24.5, 90.0],
        scale: vec![500_000.0, 50.0, 5.0, 5.0, 5.0],
        feature_names: Vec::new(),
    };
    let reference = ReferenceSet {
        artifact_id: "fuzz-knn".to_string(),
        k: 3,
        metric: "euclidean".to_string(),
        weights: "uniform".to_string(),
        points: vec![
            ReferencePoint { features: vec![-1.0, 0.5, -0.8, -0.9, 0.7], class_id: 0 },
            ReferencePoint { features: vec![0.1, 0.0, 0.2, 0.1, -0.1], class_id: 1 },
            ReferencePoint { features: vec![-0.1, 0.1, 0.0, 0.2, 0.0], class_id: 1 },
            ReferencePoint { features: vec![1.1, -0.9, 1.0, 1.2, -0.8], class_id: 2 },
            ReferencePoint { features: vec![0.9, -1.1, 1.2, 0.9, -1.0], class_id: 2 },
        ],
        feature_names: Vec::new(),
    };
    Predictor::new(scaler, reference).unwrap()
});

fn f64_at(data: &[u8], offset: usize) -> f64 {
    let mut bytes = [0u8; 8];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = data.get(offset + i).copied().unwrap_or(0);
    }
    f64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    // Vector length is fuzz-controlled so the dimension-mismatch path gets
    // hit as well as the happy path.
    let len = data.first().copied().unwrap_or(5) as usize % 8;
    let raw: Vec<f64> = (0..len).map(|i| f64_at(data, 1 + i * 8)).collect();
    let _ = PREDICTOR.predict(&raw);
});
