/// Expand a callback macro once for every combination of one token tree from each group.
///
/// ```text
/// cartesian!{
///     [{f32} {f64}]
///     [{Add add} {Sub sub}]
///     impl_op!({$T:ty} {$Op:ident $op:ident}) => { ... }
/// }
/// ```
///
/// Operator impls between every pair of matrix families are written this way, because a
/// blanket impl over both sides would overlap.
macro_rules! cartesian {
    (
        $([$($group:tt)*])*
        $mac:ident!($($pat:tt)*) => {$($body:tt)*} $(;)*
    ) => {
        macro_rules! $mac {
            ($($pat)*) => {$($body)*};
        }
        cartesian_step!{[$mac] [] $([$($group)*])*}
    };
}

// [callback] [choices so far] remaining groups...
macro_rules! cartesian_step {
    ([$mac:ident] [$($chosen:tt)*]) => { $mac!{$($chosen)*} };
    ([$mac:ident] $chosen:tt [$($choice:tt)*] $($rest:tt)*) => {
        cartesian_fan!{[$mac] $chosen [$($rest)*] $($choice)*}
    };
}

macro_rules! cartesian_fan {
    ([$mac:ident] $chosen:tt $rest:tt) => {};
    ([$mac:ident] [$($chosen:tt)*] [$($rest:tt)*] $choice:tt $($more:tt)*) => {
        cartesian_step!{[$mac] [$($chosen)* $choice] $($rest)*}
        cartesian_fan!{[$mac] [$($chosen)*] [$($rest)*] $($more)*}
    };
}

/// `cartesian!` with some predefined groups used in the library's public API.
///
/// Each matrix family is written as
/// `{(lifetimes,) (type params,) (Type) (where clauses,)}`
/// so that callbacks can splice the pieces into an impl header.
/// Lifetimes are kept apart because they must precede type parameters.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{[$($arg)*] -> []} };
}

macro_rules! gen_each__ {
    //----------------------------
    // Groups using the standard syntax supported by cartesian

    ([[$($alternatives:tt)*] $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        $($alternatives)*
    ]] }};

    //----------------------------
    // Special groups of the form @{...}

    // Scalar types with a registered same-type `Promote` entry.
    ([@{scalar} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64} {i32} {i64} {::num_complex::Complex64}
    ]] }};

    // Left operands of a matrix product or sum.
    ([@{lhs} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {() (S1, R1, C1, T1,) (Matrix<S1, R1, C1, T1>)
            (S1: Layout<R1, C1, T1>, R1: DimKind, C1: DimKind, T1: Scalar,)}
        {('v1,) (S1, T1,) (MatrixRef<'v1, S1, T1>) (S1: Shape, T1: Scalar,)}
        {('v1,) (S1, T1,) (MatrixMut<'v1, S1, T1>) (S1: Shape, T1: Scalar,)}
    ]] }};

    // Right operands; the same set with fresh names.
    ([@{rhs} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {() (S2, R2, C2, T2,) (Matrix<S2, R2, C2, T2>)
            (S2: Layout<R2, C2, T2>, R2: DimKind, C2: DimKind, T2: Scalar,)}
        {('v2,) (S2, T2,) (MatrixRef<'v2, S2, T2>) (S2: Shape, T2: Scalar,)}
        {('v2,) (S2, T2,) (MatrixMut<'v2, S2, T2>) (S2: Shape, T2: Scalar,)}
    ]] }};

    //----------------------------
    // Finish by delegating to cartesian

    ([$mac:ident!$($defn_args:tt)*] -> [$($groups:tt)*])
    => { cartesian!{ $($groups)* $mac!$($defn_args)* } };
}
