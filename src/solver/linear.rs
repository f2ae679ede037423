//! Dense linear solve.

use nalgebra::{DMatrix, DVector};

use crate::error::{MnaError, Result};

/// Solve `A x = z` by LU decomposition with partial pivoting.
///
/// Each row of A and z is first divided by the row's largest entry,
/// so widely spread conductances (milliohm shunts beside gigaohm
/// leaks) do not trip the pivot check on their own. The system is then
/// reported singular when a row is all zeros, when any pivot of U is
/// zero or smaller than `pivot_tolerance` times the largest pivot, or
/// when the solution is not finite.
pub fn solve_dense(a: &DMatrix<f64>, z: &DVector<f64>, pivot_tolerance: f64) -> Result<DVector<f64>> {
    let size = a.nrows();
    if a.ncols() != size {
        return Err(MnaError::DimensionMismatch {
            expected: size,
            actual: a.ncols(),
        });
    }
    if z.len() != size {
        return Err(MnaError::DimensionMismatch {
            expected: size,
            actual: z.len(),
        });
    }
    if size == 0 {
        return Ok(DVector::zeros(0));
    }

    let mut scaled = a.clone();
    let mut rhs = z.clone();
    for i in 0..size {
        let scale = scaled.row(i).amax();
        if !(scale > 0.0) {
            log::debug!("singular system: row {i} is empty");
            return Err(MnaError::SingularSystem { size });
        }
        scaled.row_mut(i).unscale_mut(scale);
        rhs[i] /= scale;
    }

    let lu = scaled.lu();

    let pivots = lu.u().diagonal().map(f64::abs);
    let max_pivot = pivots.max();
    let min_pivot = pivots.min();
    if min_pivot == 0.0 || min_pivot <= pivot_tolerance * max_pivot {
        log::debug!("singular system: pivot ratio {min_pivot:e}/{max_pivot:e}");
        return Err(MnaError::SingularSystem { size });
    }

    let x = lu.solve(&rhs).ok_or(MnaError::SingularSystem { size })?;
    if x.iter().any(|v| !v.is_finite()) {
        return Err(MnaError::SingularSystem { size });
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::PIVOT_TOLERANCE;
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn test_solve_simple() {
        // 2x + y = 5
        // x + 3y = 6
        let a = dmatrix![2.0, 1.0; 1.0, 3.0];
        let z = dvector![5.0, 6.0];

        let x = solve_dense(&a, &z, PIVOT_TOLERANCE).unwrap();
        assert_relative_eq!(x[0], 1.8, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_requires_pivoting() {
        // Zero on the leading diagonal, as every voltage source row has
        let a = dmatrix![0.0, 1.0; 1.0, 0.0];
        let z = dvector![3.0, 4.0];

        let x = solve_dense(&a, &z, PIVOT_TOLERANCE).unwrap();
        assert_relative_eq!(x[0], 4.0);
        assert_relative_eq!(x[1], 3.0);
    }

    #[test]
    fn test_singular_matrix() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0];
        let z = dvector![1.0, 2.0];

        assert_eq!(
            solve_dense(&a, &z, PIVOT_TOLERANCE),
            Err(MnaError::SingularSystem { size: 2 })
        );
    }

    #[test]
    fn test_nearly_singular_matrix() {
        let a = dmatrix![1.0, 1.0; 1.0, 1.0 + 1e-15];
        let z = dvector![1.0, 2.0];

        assert!(matches!(
            solve_dense(&a, &z, PIVOT_TOLERANCE),
            Err(MnaError::SingularSystem { .. })
        ));
    }

    #[test]
    fn test_wide_conductance_spread_is_solvable() {
        let a = dmatrix![1000.0, 0.0; 0.0, 1e-10];
        let z = dvector![1.0, 1e-9];

        let x = solve_dense(&a, &z, PIVOT_TOLERANCE).unwrap();
        assert_relative_eq!(x[0], 1e-3, max_relative = 1e-12);
        assert_relative_eq!(x[1], 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_row_is_singular() {
        let a = dmatrix![1.0, 0.0; 0.0, 0.0];
        let z = dvector![1.0, 0.0];

        assert_eq!(
            solve_dense(&a, &z, PIVOT_TOLERANCE),
            Err(MnaError::SingularSystem { size: 2 })
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = dmatrix![1.0, 2.0; 3.0, 4.0];
        let z = dvector![1.0, 2.0, 3.0];

        assert_eq!(
            solve_dense(&a, &z, PIVOT_TOLERANCE),
            Err(MnaError::DimensionMismatch { expected: 2, actual: 3 })
        );
    }

    #[test]
    fn test_empty_system() {
        let a = DMatrix::<f64>::zeros(0, 0);
        let z = DVector::<f64>::zeros(0);
        assert_eq!(solve_dense(&a, &z, PIVOT_TOLERANCE).unwrap().len(), 0);
    }
}
