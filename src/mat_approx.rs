use approx::{AbsDiffEq, RelativeEq};

use crate::mat::Mat;
use crate::traits::MatBase;

/// **Requires crate feature `"approx"`.**
impl<A> AbsDiffEq<Mat<A>> for Mat<A>
where
    A: AbsDiffEq,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Mat<A>, epsilon: A::Epsilon) -> bool {
        if self.dim() != other.dim() {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`.**
impl<A> RelativeEq<Mat<A>> for Mat<A>
where
    A: RelativeEq,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &Mat<A>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        if self.dim() != other.dim() {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
    }
}
