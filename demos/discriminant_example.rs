use ndarray::{Axis, concatenate};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use statlearn::dataset::grid;
use statlearn::{GaussianDiscriminant, Labels, Matrix, Vector};

/// Three Gaussian clusters with different spreads.
fn sample(rng: &mut StdRng, per_class: usize) -> (Matrix, Labels) {
    let centers = [(0.0, 0.0, 1.0), (8.0, 2.0, 2.5), (3.0, 10.0, 0.7)];
    let blocks: Vec<Matrix> = centers
        .iter()
        .map(|&(cx, cy, spread)| {
            let mut block = Matrix::random_using((per_class, 2), StandardNormal, rng) * spread;
            block.column_mut(0).mapv_inplace(|v| v + cx);
            block.column_mut(1).mapv_inplace(|v| v + cy);
            block
        })
        .collect();
    let views: Vec<_> = blocks.iter().map(|b| b.view()).collect();
    let x = concatenate(Axis(0), &views).expect("blocks share a column count");
    let y = (0..centers.len() * per_class).map(|i| i / per_class + 1).collect();
    (x, y)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Gaussian Discriminant Analysis ===\n");

    let mut rng = StdRng::seed_from_u64(42);
    let (x, y) = sample(&mut rng, 60);
    let (x_test, y_test) = sample(&mut rng, 40);

    println!("Training samples: {}, Test samples: {}\n", x.nrows(), x_test.nrows());

    for (name, model) in [
        ("LDA", GaussianDiscriminant::lda()),
        ("QDA", GaussianDiscriminant::qda()),
    ] {
        let fitted = model.fit(&x, &y)?;
        let (_, accuracy) = fitted.evaluate(&x_test, &y_test)?;

        println!("{} Accuracy = {:.4}", name, accuracy);
        for k in 1..=fitted.n_classes() {
            if let Some(mean) = fitted.statistics.mean(k) {
                println!("  class {} mean: [{:.3}, {:.3}]", k, mean[0], mean[1]);
            }
        }

        // Coarse decision map over the plane, one character per grid cell
        let xs = Vector::linspace(-5.0, 20.0, 50);
        let ys = Vector::linspace(-5.0, 20.0, 25);
        let regions = fitted.predict(&grid(&xs, &ys))?;
        println!("  decision regions:");
        for row in regions.axis_chunks_iter(Axis(0), xs.len()).rev() {
            let line: String = row.iter().map(|&label| char::from(b'0' + label as u8)).collect();
            println!("  {}", line);
        }
        println!();
    }

    Ok(())
}
