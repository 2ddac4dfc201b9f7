//! Named collaborator injection for wiring test doubles into code under test.
//!
//! Types opt in by implementing [`Injectable`], usually through the
//! [`injectable!`](crate::injectable) macro, which maps field names to typed
//! assignments.

use std::any::{type_name, Any};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectionError {
    #[error("{target} has no injectable field '{field}'")]
    UnknownField { target: &'static str, field: String },

    #[error("Field '{field}' of {target} expects a value of type {expected}")]
    TypeMismatch {
        target: &'static str,
        field: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, InjectionError>;

/// A value whose collaborators can be replaced by name.
pub trait Injectable {
    fn inject_field(&mut self, field: &str, value: Box<dyn Any>) -> Result<()>;
}

pub fn try_inject<T, V>(target: &mut T, field: &str, value: V) -> Result<()>
where
    T: Injectable + ?Sized,
    V: Any,
{
    target.inject_field(field, Box::new(value))
}

/// Replace `field` on `target`, aborting the test if that is not possible.
///
/// A failure here is a mistake in the test, not in the code under test.
#[track_caller]
pub fn inject<T, V>(target: &mut T, field: &str, value: V)
where
    T: Injectable + ?Sized,
    V: Any,
{
    if let Err(e) = try_inject(target, field, value) {
        panic!("Failed to inject {}: {}", type_name::<V>(), e);
    }
}

/// Implement [`Injectable`] for a struct by listing its injectable fields.
///
/// ```
/// use frontline_testkit::injectable;
/// use frontline_testkit::lifecycle::inject::inject;
///
/// #[derive(Default)]
/// struct Dispatcher {
///     retries: u32,
///     gateway: String,
/// }
///
/// injectable!(Dispatcher { retries: u32, gateway: String });
///
/// let mut dispatcher = Dispatcher::default();
/// inject(&mut dispatcher, "gateway", "mock".to_string());
/// assert_eq!(dispatcher.gateway, "mock");
/// ```
#[macro_export]
macro_rules! injectable {
    ($target:ty { $($field:ident : $ty:ty),+ $(,)? }) => {
        impl $crate::lifecycle::inject::Injectable for $target {
            fn inject_field(
                &mut self,
                field: &str,
                value: ::std::boxed::Box<dyn ::std::any::Any>,
            ) -> $crate::lifecycle::inject::Result<()> {
                match field {
                    $(
                        stringify!($field) => {
                            let value = value.downcast::<$ty>().map_err(|_| {
                                $crate::lifecycle::inject::InjectionError::TypeMismatch {
                                    target: ::std::any::type_name::<$target>(),
                                    field: field.to_string(),
                                    expected: ::std::any::type_name::<$ty>(),
                                }
                            })?;
                            self.$field = *value;
                            Ok(())
                        }
                    )+
                    _ => Err($crate::lifecycle::inject::InjectionError::UnknownField {
                        target: ::std::any::type_name::<$target>(),
                        field: field.to_string(),
                    }),
                }
            }
        }
    };
}
