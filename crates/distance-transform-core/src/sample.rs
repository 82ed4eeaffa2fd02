/// Element type of a raster that can be fed to a distance transform.
///
/// A cell is background when its value is zero; every other value is
/// foreground. [`Sample::from_distance`] writes a computed distance back into
/// the sample type for in-place transforms.
pub trait Sample: Copy {
    fn is_background(self) -> bool;

    /// Cast a distance into this type. Integer types truncate and saturate
    /// (`as` semantics), so an 8-bit raster clamps at 255.
    fn from_distance(d: f32) -> Self;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn is_background(self) -> bool {
                    self == 0 as $t
                }

                #[inline]
                fn from_distance(d: f32) -> Self {
                    d as $t
                }
            }
        )*
    };
}

impl_sample!(u8, u16, i32, f32, f64);

impl Sample for bool {
    #[inline]
    fn is_background(self) -> bool {
        !self
    }

    #[inline]
    fn from_distance(d: f32) -> Self {
        d > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_background() {
        assert!(0u8.is_background());
        assert!(!7u8.is_background());
        assert!(0.0f32.is_background());
        assert!((-0.0f64).is_background());
        assert!(!(-1i32).is_background());
        assert!(!f32::NAN.is_background());
        assert!(false.is_background());
    }

    #[test]
    fn distances_saturate_in_narrow_types() {
        assert_eq!(u8::from_distance(300.0), 255);
        assert_eq!(u8::from_distance(2.9), 2);
        assert_eq!(u16::from_distance(300.0), 300);
        assert!(bool::from_distance(0.5));
        assert!(!bool::from_distance(0.0));
        assert_eq!(f64::from_distance(1.5), 1.5);
    }
}
