use densor::Matrix;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut a: Matrix<f32> = Matrix::new(3, 3)?;
    a.fill_cast(5.0)?;
    print!("{}", a);
    a = a * 3.0;
    print!("{}", a);

    let mut b: Matrix<i32> = Matrix::new(3, 3)?;
    b.fill(3);
    print!("{}", b);
    b = 10 * b;
    print!("{}", b);

    let c = (&b * &b.transpose())?;
    info!("b * b^T has shape {}", c.shape());
    print!("{}", c);

    Ok(())
}
