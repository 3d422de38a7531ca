use nalgebra as na;
use num_traits::Float;

/// Least-squares fit of y = p0*x^2 + p1*x + p2, solving the normal
/// equations with a QR decomposition.
///
/// Returns `None` when the system is singular.
pub fn quadratic_ls<T: na::ComplexField + Float>(
    x: &na::DVector<T>,
    y: &na::DVector<T>,
) -> Option<na::Matrix3x1<T>> {
    let n = T::from(x.len()).unwrap();

    let mut s_x1 = T::zero();
    let mut s_x2 = T::zero();
    let mut s_x3 = T::zero();
    let mut s_x4 = T::zero();
    let mut s_y = T::zero();
    let mut s_xy = T::zero();
    let mut s_x2y = T::zero();

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let xi2 = xi * xi;

        s_x1 = s_x1 + xi;
        s_x2 = s_x2 + xi2;
        s_x3 = s_x3 + xi2 * xi;
        s_x4 = s_x4 + xi2 * xi2;
        s_y = s_y + yi;
        s_xy = s_xy + xi * yi;
        s_x2y = s_x2y + xi2 * yi;
    }

    let a = na::Matrix3::new(s_x4, s_x3, s_x2, s_x3, s_x2, s_x1, s_x2, s_x1, n);
    let b = na::Matrix3x1::new(s_x2y, s_xy, s_y);

    let qr_result = a.qr();
    let qty = qr_result.q().transpose() * b;

    qr_result.r().solve_upper_triangular(&qty)
}

/// Pearson correlation coefficient of two equal-length columns.
///
/// Returns `None` when either column has no spread, where the coefficient
/// is undefined.
pub fn pearson<T: na::ComplexField + Float>(
    a: &na::DVector<T>,
    b: &na::DVector<T>,
) -> Option<T> {
    debug_assert_eq!(a.len(), b.len());

    let ma = a.mean();
    let mb = b.mean();

    let mut cov = T::zero();
    let mut var_a = T::zero();
    let mut var_b = T::zero();

    for (&ai, &bi) in a.iter().zip(b.iter()) {
        let da = ai - ma;
        let db = bi - mb;

        cov = cov + da * db;
        var_a = var_a + da * da;
        var_b = var_b + db * db;
    }

    let floor = T::from(f32::EPSILON).unwrap();
    if var_a <= floor || var_b <= floor {
        return None;
    }

    Some(cov / Float::sqrt(var_a * var_b))
}
