/// Declare a symbol enumeration and implement [`Symbol`](crate::Symbol) for it.
///
/// ```
/// petalex::symbols! {
///     pub enum Op {
///         Add => "+",
///         Pow => "**" | "^",
///     }
/// }
///
/// use petalex::Symbol;
/// assert_eq!(Op::Pow.literals(), &["**", "^"]);
/// ```
#[macro_export]
macro_rules! symbols {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $($lit:literal)|+ ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),*
        }

        impl $crate::Symbol for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant ),* ];

            fn literals(self) -> &'static [&'static str] {
                match self {
                    $( $name::$variant => &[ $($lit),+ ] ),*
                }
            }
        }
    };
}

/// Build a library rule once, on first use.
///
/// Library patterns are fixed strings, so a failure here is a bug in the
/// pattern itself.
macro_rules! library_rule {
    ($pat:expr) => {
        once_cell::sync::Lazy::new(|| $crate::Rule::new($pat).expect("library rule pattern compiles"))
    };
    ($pat:expr, $conv:expr) => {
        once_cell::sync::Lazy::new(|| $crate::Rule::convert($pat, $conv).expect("library rule pattern compiles"))
    };
}
