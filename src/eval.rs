//! Function evaluators.
//!
//! An evaluator binds one function to a shared [`Context`], so that functions can be passed
//! around as values and evaluated uniformly through [`UnaryFunction`] or [`BinaryFunction`].
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use decimal_elementary::{dec, Context, Precision};
//! use decimal_elementary::eval::{Sin, Cos, Hypot, UnaryFunction, BinaryFunction};
//!
//! let ctx = Arc::new(Context::new(Precision::new(100, 20).unwrap()));
//!
//! let funcs: Vec<Box<dyn UnaryFunction>> = vec![Box::new(Sin::new(ctx.clone())), Box::new(Cos::new(ctx.clone()))];
//! let values: Vec<_> = funcs.iter().map(|f| f.eval(&dec!(0)).unwrap()).collect();
//! assert_eq!(values, vec![dec!(0), dec!(1)]);
//!
//! let hypot = Hypot::new(ctx);
//! assert_eq!(hypot.eval(&dec!(3), &dec!(4)).unwrap(), dec!(5));
//! ```

use std::sync::Arc;

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;
use crate::prec::Precision;

/// A function of one argument.
pub trait UnaryFunction: Send + Sync {
    /// Evaluates the function at `x`.
    fn eval(&self, x: &Decimal) -> Result<Decimal, Error>;
}

/// A function of two arguments.
pub trait BinaryFunction: Send + Sync {
    /// Evaluates the function at `(x, y)`.
    fn eval(&self, x: &Decimal, y: &Decimal) -> Result<Decimal, Error>;
}

macro_rules! gen_evaluator {
    ($comment:literal, $name:ident) => {
        #[doc=$comment]
        #[derive(Debug, Clone)]
        pub struct $name {
            ctx: Arc<Context>,
        }

        impl $name {
            /// Creates the evaluator using the shared context `ctx`.
            pub fn new(ctx: Arc<Context>) -> Self {
                $name { ctx }
            }

            /// Creates the evaluator with its own context built from `prec`.
            pub fn from_precision(prec: Precision) -> Self {
                Self::new(Arc::new(Context::new(prec)))
            }

            /// Returns the context of the evaluator.
            pub fn context(&self) -> &Context {
                &self.ctx
            }
        }
    };
}

macro_rules! gen_unary {
    ($comment:literal, $name:ident, $fname:ident) => {
        gen_evaluator!($comment, $name);

        impl UnaryFunction for $name {
            fn eval(&self, x: &Decimal) -> Result<Decimal, Error> {
                self.ctx.$fname(x)
            }
        }
    };
}

macro_rules! gen_binary {
    ($comment:literal, $name:ident, $fname:ident) => {
        gen_evaluator!($comment, $name);

        impl BinaryFunction for $name {
            fn eval(&self, x: &Decimal, y: &Decimal) -> Result<Decimal, Error> {
                self.ctx.$fname(x, y)
            }
        }
    };
}

gen_unary!("Square root.", Sqrt, sqrt);
gen_unary!("Cube root.", Cbrt, cbrt);
gen_unary!("Natural logarithm.", Ln, ln);
gen_unary!("Decimal logarithm.", Log10, log10);
gen_unary!("Binary logarithm.", Log2, log2);
gen_unary!("Exponent.", Exp, exp);
gen_unary!("Sine.", Sin, sin);
gen_unary!("Cosine.", Cos, cos);
gen_unary!("Versine `1 - cos(x)`.", Versin, versin);
gen_unary!("Tangent.", Tan, tan);
gen_unary!("Arcsine.", Asin, asin);
gen_unary!("Arccosine.", Acos, acos);
gen_unary!("Arctangent.", Atan, atan);
gen_unary!("Hyperbolic sine.", Sinh, sinh);
gen_unary!("Hyperbolic cosine.", Cosh, cosh);
gen_unary!("Hyperbolic tangent.", Tanh, tanh);
gen_unary!("Inverse hyperbolic sine.", Asinh, asinh);
gen_unary!("Inverse hyperbolic cosine.", Acosh, acosh);
gen_unary!("Inverse hyperbolic tangent.", Atanh, atanh);

gen_binary!("Two-argument arctangent: the first argument is the ordinate `y`, the second is the abscissa `x`.", Atan2, atan2);
gen_binary!("Power: the first argument is the base, the second is the exponent.", Pow, pow);
gen_binary!("Length of the hypotenuse `sqrt(x^2 + y^2)`.", Hypot, hypot);
gen_binary!("Logarithm: the first argument is the number, the second is the base.", LogBase, log_base);

#[cfg(test)]
mod tests {

    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn ctx() -> Arc<Context> {
        Arc::new(Context::new(Precision::new(100, 30).unwrap()))
    }

    #[test]
    fn test_unary() {
        let ctx = ctx();
        let x = d("0.5");

        let funcs: Vec<(Box<dyn UnaryFunction>, Result<Decimal, Error>)> = vec![
            (Box::new(Sqrt::new(ctx.clone())), ctx.sqrt(&x)),
            (Box::new(Cbrt::new(ctx.clone())), ctx.cbrt(&x)),
            (Box::new(Ln::new(ctx.clone())), ctx.ln(&x)),
            (Box::new(Log10::new(ctx.clone())), ctx.log10(&x)),
            (Box::new(Log2::new(ctx.clone())), ctx.log2(&x)),
            (Box::new(Exp::new(ctx.clone())), ctx.exp(&x)),
            (Box::new(Sin::new(ctx.clone())), ctx.sin(&x)),
            (Box::new(Cos::new(ctx.clone())), ctx.cos(&x)),
            (Box::new(Versin::new(ctx.clone())), ctx.versin(&x)),
            (Box::new(Tan::new(ctx.clone())), ctx.tan(&x)),
            (Box::new(Asin::new(ctx.clone())), ctx.asin(&x)),
            (Box::new(Acos::new(ctx.clone())), ctx.acos(&x)),
            (Box::new(Atan::new(ctx.clone())), ctx.atan(&x)),
            (Box::new(Sinh::new(ctx.clone())), ctx.sinh(&x)),
            (Box::new(Cosh::new(ctx.clone())), ctx.cosh(&x)),
            (Box::new(Tanh::new(ctx.clone())), ctx.tanh(&x)),
            (Box::new(Asinh::new(ctx.clone())), ctx.asinh(&x)),
            (Box::new(Acosh::new(ctx.clone())), ctx.acosh(&x)),
            (Box::new(Atanh::new(ctx.clone())), ctx.atanh(&x)),
        ];

        for (f, expected) in funcs.iter() {
            assert_eq!(&f.eval(&x), expected);
        }

        assert_eq!(Sin::new(ctx.clone()).eval(&d("0.5")).unwrap(), d("0.479425538604203000273287935216"));
        assert!(Acosh::new(ctx).eval(&x).is_err());
    }

    #[test]
    fn test_binary() {
        let ctx = ctx();

        assert_eq!(Atan2::new(ctx.clone()).eval(&d("1"), &d("0")).unwrap(), ctx.pi().unwrap().mul_full_prec(&d("0.5")).unwrap().round(30, ctx.rounding_mode()));
        assert_eq!(Pow::new(ctx.clone()).eval(&d("2"), &d("10")).unwrap(), d("1024"));
        assert_eq!(Hypot::new(ctx.clone()).eval(&d("5"), &d("12")).unwrap(), d("13"));
        assert_eq!(LogBase::new(ctx.clone()).eval(&d("8"), &d("2")).unwrap(), d("3"));
        assert!(Pow::new(ctx).eval(&d("-8"), &d("0.5")).is_err());
    }

    #[test]
    fn test_from_precision() {
        let prec = Precision::new(50, 15).unwrap();
        let f = Exp::from_precision(prec.clone());

        assert_eq!(f.context().digits(), 15);
        assert_eq!(f.eval(&d("1")).unwrap(), d("2.71828182845905"));

        // evaluators are shared between threads with their context
        let f = Arc::new(f);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let f = f.clone();
                std::thread::spawn(move || f.eval(&d("1")).unwrap())
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), d("2.71828182845905"));
        }
    }
}
