use std::error::Error;

use linalg_core::{approx_eq, AnyMatrix, IdentityMatrix, Matrix, SparseIdentityMatrix};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mat2x2 = AnyMatrix::<f64>::from_rows([[1.0, 2.0], [3.0, 4.0]])?;
    let ident2x2 = AnyMatrix::<f64>::identity(2);
    let mat2x3 = AnyMatrix::<f64>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;

    let start_time = std::time::Instant::now();
    let result = mat2x2.matmul(&ident2x2)?.matmul(&mat2x3)?;
    log::info!("Chained product computed in {:?}", start_time.elapsed());
    println!("{}", result);

    // Both identity representations print and multiply the same way; only the
    // materialized one holds an n x n grid.
    let dimension = 8;
    let materialized = IdentityMatrix::<f64>::new(dimension);
    let sparse = SparseIdentityMatrix::<f64>::new(dimension);
    println!("{}", materialized);
    println!("{}", sparse);
    log::info!(
        "Identity variants equal: {}",
        approx_eq(&materialized, &sparse, 0.0)
    );
    log::info!(
        "Materialized grid holds {} elements, sparse holds none",
        materialized.as_dense().as_slice().len()
    );

    match mat2x3.matmul(&mat2x2) {
        Ok(m) => println!("Unexpected product: {}", m),
        Err(e) => log::warn!("Rejected product: {}", e),
    }

    println!("{}", result.row(1)?);
    Ok(())
}
