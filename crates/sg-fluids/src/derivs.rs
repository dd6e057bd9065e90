//! Value-with-derivatives return shape shared by every property function.

use sg_core::Real;

/// A property value and its partial derivatives with respect to the two
/// independent variables of the query, in argument order.
///
/// For `rho_from_p_T(p, T)` the fields are `(ρ, ∂ρ/∂p|T, ∂ρ/∂T|p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDerivs {
    pub value: Real,
    pub d_dx1: Real,
    pub d_dx2: Real,
}

impl ValueDerivs {
    pub fn new(value: Real, d_dx1: Real, d_dx2: Real) -> Self {
        Self {
            value,
            d_dx1,
            d_dx2,
        }
    }

    /// A state-independent property.
    pub fn constant(value: Real) -> Self {
        Self::new(value, 0.0, 0.0)
    }

    /// Gradient as a pair.
    pub fn grad(&self) -> (Real, Real) {
        (self.d_dx1, self.d_dx2)
    }

    /// Re-express the derivatives in another pair of variables.
    ///
    /// `jac` holds the partials of the current variables `(x1, x2)` with
    /// respect to the new variables `(y1, y2)`, row-major:
    /// `[[∂x1/∂y1, ∂x1/∂y2], [∂x2/∂y1, ∂x2/∂y2]]`.
    pub fn chain(&self, jac: [[Real; 2]; 2]) -> Self {
        Self::new(
            self.value,
            self.d_dx1 * jac[0][0] + self.d_dx2 * jac[1][0],
            self.d_dx1 * jac[0][1] + self.d_dx2 * jac[1][1],
        )
    }
}

impl From<ValueDerivs> for (Real, Real, Real) {
    fn from(d: ValueDerivs) -> Self {
        (d.value, d.d_dx1, d.d_dx2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_has_zero_gradient() {
        let c = ValueDerivs::constant(0.6);
        assert_eq!(c.grad(), (0.0, 0.0));
        assert_eq!(c.value, 0.6);
    }

    #[test]
    fn chain_applies_jacobian() {
        // f(x1, x2) = x1 * x2 at (2, 3); x1 = y1 + y2, x2 = y1 - y2
        let f = ValueDerivs::new(6.0, 3.0, 2.0);
        let g = f.chain([[1.0, 1.0], [1.0, -1.0]]);
        assert_eq!(g.value, 6.0);
        assert_eq!(g.d_dx1, 5.0);
        assert_eq!(g.d_dx2, 1.0);
    }

    #[test]
    fn tuple_conversion_keeps_order() {
        let (v, a, b): (Real, Real, Real) = ValueDerivs::new(1.0, 2.0, 3.0).into();
        assert_eq!((v, a, b), (1.0, 2.0, 3.0));
    }
}
