//! Internal builder-method macros

/// Generates `Option<String>` style-attribute setters on a component builder.
macro_rules! style_setters {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )+
    };
}

pub(crate) use style_setters;
