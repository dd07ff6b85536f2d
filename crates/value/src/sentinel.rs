/// Names the designated nil value of a nullable-by-convention type.
///
/// [`Value::of_nullable`](crate::Value::of_nullable) treats `NIL` as
/// absence; every other value of the type is a genuine payload.
pub trait Sentinel: Sized {
    /// The value that denotes "no value".
    const NIL: Self;

    /// Returns true if `self` is the nil sentinel.
    fn is_nil(&self) -> bool;
}

macro_rules! sentinel_max {
    ($($t:ty),*) => {$(
        impl Sentinel for $t {
            const NIL: Self = <$t>::MAX;

            fn is_nil(&self) -> bool {
                *self == Self::NIL
            }
        }
    )*};
}

macro_rules! sentinel_min {
    ($($t:ty),*) => {$(
        impl Sentinel for $t {
            const NIL: Self = <$t>::MIN;

            fn is_nil(&self) -> bool {
                *self == Self::NIL
            }
        }
    )*};
}

sentinel_max!(u8, u16, u32, u64, u128, usize);
sentinel_min!(i8, i16, i32, i64, i128, isize);

// NaN never equals itself, so the check goes through is_nan.
impl Sentinel for f32 {
    const NIL: Self = f32::NAN;

    fn is_nil(&self) -> bool {
        self.is_nan()
    }
}

impl Sentinel for f64 {
    const NIL: Self = f64::NAN;

    fn is_nil(&self) -> bool {
        self.is_nan()
    }
}

impl<T> Sentinel for *const T {
    const NIL: Self = core::ptr::null();

    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T> Sentinel for *mut T {
    const NIL: Self = core::ptr::null_mut();

    fn is_nil(&self) -> bool {
        self.is_null()
    }
}
