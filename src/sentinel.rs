/// Element types with a value that compares greater than or equal to every
/// other value of the type. `merge_sort` appends it to each merge buffer.
///
/// The sentinel is itself a representable value (`MAX` for integers,
/// `INFINITY` for floats), so inputs must stay strictly below it. Types with
/// no maximum at all should use `merge_sort_unbounded` instead.
pub trait Sentinel: PartialOrd + Copy {
    fn sentinel() -> Self;
}

macro_rules! impl_sentinel_int {
    ($($t:ty),*) => {
        $(
            impl Sentinel for $t {
                #[inline]
                fn sentinel() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

macro_rules! impl_sentinel_float {
    ($($t:ty),*) => {
        $(
            impl Sentinel for $t {
                #[inline]
                fn sentinel() -> Self {
                    <$t>::INFINITY
                }
            }
        )*
    };
}

impl_sentinel_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_sentinel_float!(f32, f64);
