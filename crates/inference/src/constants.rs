/// Number of indicators in the model's input vector.
pub const FEATURE_COUNT: usize = 5;

/// Indicator names in training order. The scaler and the reference set were
/// both fitted against this order, so it is load-bearing: artifacts that
/// carry their own feature list are checked against it at load time.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "harga_cabai", // average chili price (Rp)
    "gkg",         // milled dry grain yield (gabah kering giling)
    "kemiskinan",  // poverty rate (%)
    "stunting",    // stunting rate (%)
    "air_bersih",  // clean water access (%)
];
