use ndarray::array;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{StandardNormal, Uniform};
use rand::SeedableRng;
use rand::rngs::StdRng;
use statlearn::linear_model::fit_regularized;
use statlearn::{Dataset, LbfgsMinimizer, LinearRegression, Matrix, Ridge, Vector};

/// Few samples, many weakly relevant features: the setting where the
/// penalty pays off on held-out data.
fn sample(rng: &mut StdRng, n: usize, coefficients: &Vector) -> Dataset {
    let x = Matrix::random_using((n, coefficients.len()), Uniform::new(-1.0, 1.0), rng);
    let noise = Vector::random_using(n, StandardNormal, rng) * 0.8;
    let y = x.dot(coefficients) + 2.0 + noise;
    Dataset { features: x, targets: y }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Ridge Regression: lambda sweep ===\n");

    let mut rng = StdRng::seed_from_u64(7);
    let mut coefficients = Vector::random_using(20, StandardNormal, &mut rng) * 0.3;
    coefficients.slice_mut(ndarray::s![..3]).assign(&array![2.0, -1.5, 1.0]);

    let train = sample(&mut rng, 40, &coefficients);
    let test = sample(&mut rng, 200, &coefficients);

    // OLS with and without an intercept column
    let ols = LinearRegression::new().fit(&train.features, &train.targets)?;
    let mse = ols.mse(&test.features, &test.targets)?;
    let (train_i, test_i) = (train.with_intercept(), test.with_intercept());
    let ols_i = LinearRegression::new().fit(&train_i.features, &train_i.targets)?;
    let mse_i = ols_i.mse(&test_i.features, &test_i.targets)?;

    println!("MSE without intercept {:.4}", mse);
    println!("MSE with intercept    {:.4}\n", mse_i);

    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>14}",
        "lambda", "train (exact)", "test (exact)", "train (lbfgs)", "test (lbfgs)"
    );
    println!("{}", "-".repeat(68));

    let minimizer = LbfgsMinimizer::new().max_iters(20);
    let initial = Vector::ones(train_i.n_features());
    let mut best = (f64::INFINITY, 0.0);

    for lambda in Vector::linspace(0.0, 1.0, 11) {
        let exact = Ridge::new().lambda(lambda).fit(&train_i.features, &train_i.targets)?;
        let iterative = statlearn::LinearModel::new(fit_regularized(
            &train_i.features,
            &train_i.targets,
            lambda,
            &minimizer,
            initial.clone(),
        )?);

        let test_mse = exact.mse(&test_i.features, &test_i.targets)?;
        if test_mse < best.0 {
            best = (test_mse, lambda);
        }

        println!(
            "{:>8.2} {:>14.4} {:>14.4} {:>14.4} {:>14.4}",
            lambda,
            exact.mse(&train_i.features, &train_i.targets)?,
            test_mse,
            iterative.mse(&train_i.features, &train_i.targets)?,
            iterative.mse(&test_i.features, &test_i.targets)?
        );
    }

    println!("\nLowest test MSE {:.4} at lambda = {:.2}", best.0, best.1);
    Ok(())
}
