use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{StandardNormal, Uniform};
use rand::SeedableRng;
use rand::rngs::StdRng;
use statlearn::{PolynomialFeatures, Ridge, Vector};

fn target(x: &Vector) -> Vector {
    x.mapv(|v| (2.0 * v).sin() + 0.3 * v)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Polynomial Regression: degree sweep ===\n");

    let mut rng = StdRng::seed_from_u64(3);
    let x = Vector::random_using(30, Uniform::new(-2.0, 2.0), &mut rng);
    let y = target(&x) + Vector::random_using(30, StandardNormal, &mut rng) * 0.2;
    let x_test = Vector::linspace(-2.0, 2.0, 100);
    let y_test = target(&x_test);

    let lambda = 0.06;
    println!(
        "{:>6} {:>16} {:>16} {:>16} {:>16}",
        "degree", "train (λ=0)", "test (λ=0)", "train (λ=0.06)", "test (λ=0.06)"
    );
    println!("{}", "-".repeat(74));

    for degree in 0..7 {
        let features = PolynomialFeatures::new(degree);
        let xp = features.transform(x.view());
        let xp_test = features.transform(x_test.view());

        let plain = Ridge::new().lambda(0.0).fit(&xp, &y)?;
        let regularized = Ridge::new().lambda(lambda).fit(&xp, &y)?;

        println!(
            "{:>6} {:>16.4} {:>16.4} {:>16.4} {:>16.4}",
            degree,
            plain.mse(&xp, &y)?,
            plain.mse(&xp_test, &y_test)?,
            regularized.mse(&xp, &y)?,
            regularized.mse(&xp_test, &y_test)?
        );
    }

    Ok(())
}
