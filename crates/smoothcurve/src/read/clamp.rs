use ndarray::Array1;

/// Clamp every value into the unit interval `[0, 1]`
///
/// # Arguments
/// * `arr` - Array of rescaled values
///
/// # Returns
/// * Array with values below 0 raised to 0 and values above 1 lowered to 1
pub fn clamp_unit(arr: &Array1<f64>) -> Array1<f64> {
    arr.mapv(|v| v.clamp(0.0, 1.0))
}
