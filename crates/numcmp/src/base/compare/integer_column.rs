use crate::base::database::IntegerType;

mod private {
    pub trait Sealed {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// The native integer types backing `int2`, `int4` and `int8` columns.
pub trait IntegerColumn: Copy + Into<i64> + private::Sealed {
    /// The column type this native type backs.
    const INTEGER_TYPE: IntegerType;
}

impl IntegerColumn for i16 {
    const INTEGER_TYPE: IntegerType = IntegerType::SmallInt;
}

impl IntegerColumn for i32 {
    const INTEGER_TYPE: IntegerType = IntegerType::Int;
}

impl IntegerColumn for i64 {
    const INTEGER_TYPE: IntegerType = IntegerType::BigInt;
}
