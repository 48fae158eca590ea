//! Macro utilitaria para reducir boilerplate al declarar componentes de step.
//!
//! Exportada en la raíz del crate para poder usarse como:
//!   use wizard_core::step_component;

/// Declara un componente de step unitario con `Default` + `StepComponent`.
///
/// Formas soportadas:
/// - `step_component!(pub Name);` // sin metadata
/// - `step_component!(pub Name { "title": "Cuenta", "order": 1 });`
///
/// Cada valor de metadata es un único token tree que se pasa a `json!`:
/// un literal, un array `[...]`, un objeto `{...}` o una expresión entre
/// paréntesis. Los números negativos van entre paréntesis: `"order": (-1)`.
#[macro_export]
macro_rules! step_component {
    // Con metadata
    ($(#[$meta:meta])* $vis:vis $name:ident { $($key:literal : $value:tt),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        $vis struct $name;
        impl $crate::step::StepComponent for $name {
            fn step_info(&self) -> $crate::step::StepInfo {
                #[allow(unused_mut)]
                let mut info = $crate::step::StepInfo::new();
                $( info.insert(($key).to_string(), $crate::__serde_json::json!($value)); )*
                info
            }
        }
    };
    // Sin metadata
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $crate::step_component!($(#[$meta])* $vis $name {});
    };
}
