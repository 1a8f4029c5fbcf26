use super::least_squares::validate_lambda;
use crate::error::{LearnError, Result, ensure_len};
use crate::{Matrix, Vector};
use argmin::core::{CostFunction, Executor, Gradient, State};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use log::debug;

/// A scalar function of a weight vector together with its gradient.
///
/// This is the seam between the regression code and an iterative minimizer:
/// a `Minimizer` only ever sees weights go in and a loss and gradient come out.
pub trait DifferentiableObjective {
    /// Length of the weight vector the objective accepts.
    fn dimension(&self) -> usize;

    fn loss_and_gradient(&self, w: &Vector) -> Result<(f64, Vector)>;

    fn loss(&self, w: &Vector) -> Result<f64> {
        self.loss_and_gradient(w).map(|(loss, _)| loss)
    }

    fn gradient(&self, w: &Vector) -> Result<Vector> {
        self.loss_and_gradient(w).map(|(_, grad)| grad)
    }
}

/// Iterative minimizer over a `DifferentiableObjective`.
pub trait Minimizer {
    fn minimize(&self, objective: &dyn DifferentiableObjective, initial: Vector) -> Result<Vector>;
}

/// Ridge least-squares loss:
///
/// ```text
/// loss(w)     = ½ (y − Xw)ᵀ(y − Xw) + ½ λ wᵀw
/// gradient(w) = XᵀXw − Xᵀy + λw
/// ```
///
/// Its unique minimizer is the closed-form ridge solution.
#[derive(Clone, Debug)]
pub struct RegularizedObjective<'a> {
    x: &'a Matrix,
    y: &'a Vector,
    lambda: f64,
}

impl<'a> RegularizedObjective<'a> {
    pub fn new(x: &'a Matrix, y: &'a Vector, lambda: f64) -> Result<Self> {
        validate_lambda(lambda)?;
        ensure_len("number of samples in X and y", x.nrows(), y.len())?;
        Ok(Self { x, y, lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    fn check_weights(&self, w: &Vector) -> Result<()> {
        ensure_len("number of features in X and weights", self.x.ncols(), w.len())
    }
}

impl DifferentiableObjective for RegularizedObjective<'_> {
    fn dimension(&self) -> usize {
        self.x.ncols()
    }

    fn loss_and_gradient(&self, w: &Vector) -> Result<(f64, Vector)> {
        self.check_weights(w)?;
        let residual = self.x.dot(w) - self.y;
        let loss = 0.5 * residual.dot(&residual) + 0.5 * self.lambda * w.dot(w);
        let grad = self.x.t().dot(&residual) + self.lambda * w;
        Ok((loss, grad))
    }

    fn loss(&self, w: &Vector) -> Result<f64> {
        self.check_weights(w)?;
        let residual = self.y - &self.x.dot(w);
        Ok(0.5 * residual.dot(&residual) + 0.5 * self.lambda * w.dot(w))
    }
}

pub fn objective(w: &Vector, x: &Matrix, y: &Vector, lambda: f64) -> Result<f64> {
    RegularizedObjective::new(x, y, lambda)?.loss(w)
}

pub fn gradient(w: &Vector, x: &Matrix, y: &Vector, lambda: f64) -> Result<Vector> {
    RegularizedObjective::new(x, y, lambda)?.gradient(w)
}

/// Ridge weights found by iterating `minimizer` from `initial` instead of
/// inverting `XᵀX + λI`.
pub fn fit_regularized(
    x: &Matrix,
    y: &Vector,
    lambda: f64,
    minimizer: &dyn Minimizer,
    initial: Vector,
) -> Result<Vector> {
    let objective = RegularizedObjective::new(x, y, lambda)?;
    ensure_len("initial weights and number of features", initial.len(), x.ncols())?;
    debug!(
        "gradient-based ridge fit: {} samples, {} features, lambda {}",
        x.nrows(),
        x.ncols(),
        lambda
    );
    minimizer.minimize(&objective, initial)
}

/// Exposes a `DifferentiableObjective` to argmin solvers.
struct ArgminProblem<'a> {
    objective: &'a dyn DifferentiableObjective,
}

impl CostFunction for ArgminProblem<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> std::result::Result<Self::Output, argmin::core::Error> {
        Ok(self.objective.loss(&Vector::from(param.clone()))?)
    }
}

impl Gradient for ArgminProblem<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(
        &self,
        param: &Self::Param,
    ) -> std::result::Result<Self::Gradient, argmin::core::Error> {
        Ok(self.objective.gradient(&Vector::from(param.clone()))?.to_vec())
    }
}

/// L-BFGS with a More-Thuente line search, backed by argmin.
#[derive(Clone, Debug, PartialEq)]
pub struct LbfgsMinimizer {
    max_iters: u64,
    memory: usize,
    tolerance_grad: f64,
}

impl LbfgsMinimizer {
    pub fn new() -> Self {
        Self {
            max_iters: 100,
            memory: 7,
            tolerance_grad: 1e-8,
        }
    }

    pub fn max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn memory(mut self, memory: usize) -> Self {
        self.memory = memory;
        self
    }

    pub fn tolerance_grad(mut self, tolerance_grad: f64) -> Self {
        self.tolerance_grad = tolerance_grad;
        self
    }
}

impl Default for LbfgsMinimizer {
    fn default() -> Self {
        Self::new()
    }
}

fn optimizer_error(err: argmin::core::Error) -> LearnError {
    // Errors raised by the objective itself travel through argmin unchanged
    match err.downcast::<LearnError>() {
        Ok(inner) => inner,
        Err(other) => LearnError::Optimizer(other.to_string()),
    }
}

impl Minimizer for LbfgsMinimizer {
    fn minimize(&self, objective: &dyn DifferentiableObjective, initial: Vector) -> Result<Vector> {
        ensure_len(
            "initial weights and objective dimension",
            initial.len(),
            objective.dimension(),
        )?;

        let linesearch: MoreThuenteLineSearch<Vec<f64>, Vec<f64>, f64> =
            MoreThuenteLineSearch::new();
        let solver: LBFGS<_, Vec<f64>, Vec<f64>, f64> = LBFGS::new(linesearch, self.memory)
            .with_tolerance_grad(self.tolerance_grad)
            .map_err(optimizer_error)?;

        let result = Executor::new(ArgminProblem { objective }, solver)
            .configure(|state| state.param(initial.to_vec()).max_iters(self.max_iters))
            .run()
            .map_err(optimizer_error)?;

        let state = result.state();
        debug!(
            "L-BFGS finished after {} iterations, best loss {}",
            state.get_iter(),
            state.get_best_cost()
        );
        state
            .get_best_param()
            .map(|best| Vector::from(best.clone()))
            .ok_or_else(|| LearnError::Optimizer("solver returned no parameters".to_string()))
    }
}
