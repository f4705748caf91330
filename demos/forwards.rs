use densead::{Evaluation, MathToolbox};

// Ideal gas density with a temperature dependent correction,
// rho = p / (R T) * (T / T_ref)^-0.3
fn density<T: MathToolbox<Scalar = f64>>(pressure: T, temperature: T) -> T {
    let gas_constant = T::from_scalar(287.05);
    let t_ref = T::from_scalar(293.15);
    let correction = (temperature / t_ref).pow_const_exp(T::Value::from_scalar(-0.3));
    pressure / (gas_constant * temperature) * correction
}

fn main() -> densead::Result<()> {
    let p = Evaluation::<f64, 2>::create_variable(101_325.0, 0)?; // Pa
    let t = Evaluation::<f64, 2>::create_variable(300.0, 1)?; // K

    let rho = density(p, t);
    println!("rho = {}", rho.value);
    println!("drho/dp = {}", rho.derivatives[0]);
    println!("drho/dT = {}", rho.derivatives[1]);

    // the same code without derivatives
    let rho_plain = density(101_325.0_f64, 300.0);
    println!("rho (plain f64) = {}", rho_plain);
    Ok(())
}
