/// In-place element-wise arithmetic on `f64` slices. Nothing here allocates:
/// every operation writes into a buffer the caller already owns.
///
/// # Panics
///
/// Every operation taking a second vector panics if the lengths differ.
pub trait VectorMut {
    fn fill(&mut self, value: f64) -> &mut Self;
    fn add_assign(&mut self, othr: &Self);
    fn sub_assign(&mut self, othr: &Self);
    fn sub_into(&self, othr: &Self, dest: &mut Self);
    fn scale(&mut self, s: f64);
    fn copy_from(&mut self, src: &Self);
}

impl VectorMut for [f64] {
    fn fill(&mut self, value: f64) -> &mut Self {
        <[f64]>::fill(self, value);
        self
    }

    fn add_assign(&mut self, othr: &[f64]) {
        assert_eq!(self.len(), othr.len());
        for (a, b) in self.iter_mut().zip(othr) {
            *a += b;
        }
    }

    fn sub_assign(&mut self, othr: &[f64]) {
        assert_eq!(self.len(), othr.len());
        for (a, b) in self.iter_mut().zip(othr) {
            *a -= b;
        }
    }

    /// Writes `self - othr` into `dest`, leaving both operands untouched.
    fn sub_into(&self, othr: &[f64], dest: &mut [f64]) {
        assert_eq!(self.len(), othr.len());
        assert_eq!(self.len(), dest.len());
        for ((d, a), b) in dest.iter_mut().zip(self).zip(othr) {
            *d = a - b;
        }
    }

    fn scale(&mut self, s: f64) {
        for a in self.iter_mut() {
            *a *= s;
        }
    }

    fn copy_from(&mut self, src: &[f64]) {
        self.copy_from_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::VectorLike;

    #[test]
    fn fill_overwrites_and_chains() {
        let mut v = [1.0f64, 2.0, 3.0];
        VectorMut::fill(&mut v[..], 7.5).scale(2.0);
        assert_eq!(v, [15.0, 15.0, 15.0]);
    }

    #[test]
    fn add_then_sub_restores() {
        let mut v = [1.0f64, -2.0, 0.5];
        let w = [0.25, 4.0, -1.0];
        v.add_assign(&w);
        assert_eq!(v, [1.25, 2.0, -0.5]);
        v.sub_assign(&w);
        assert_eq!(v, [1.0, -2.0, 0.5]);
    }

    #[test]
    fn sub_into_matches_distance() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let mut diff = [0.0f64; 3];
        a.sub_into(&b, &mut diff);
        assert_eq!(diff, [-3.0, -3.0, -3.0]);
        assert_eq!(diff.dot(&diff), a.l2_squared(&b));
        assert_eq!(a, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn copy_from_replaces_contents() {
        let mut v = [0.0f64; 2];
        VectorMut::copy_from(&mut v[..], &[3.0, 4.0]);
        assert_eq!(v, [3.0, 4.0]);
        assert_eq!(v.norm(), 5.0);
    }

    #[test]
    #[should_panic]
    fn add_assign_rejects_mismatch() {
        let mut v = [1.0f64, 2.0];
        v.add_assign(&[1.0]);
    }

    #[test]
    #[should_panic]
    fn sub_into_rejects_short_destination() {
        let mut dest = [0.0f64; 1];
        [1.0f64, 2.0].sub_into(&[1.0, 2.0], &mut dest);
    }
}
