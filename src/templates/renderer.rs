//! Jinja2 template rendering.
//!
//! The remote templates are Jinja2 files. They are rendered with `minijinja`
//! using its defaults, which match Jinja2's: undefined variables render as
//! empty text, a single trailing newline is dropped, no auto-escaping for
//! string templates.

use serde::Serialize;

/// Render `source` with the variables in `context`.
pub fn render<C: Serialize>(source: &str, context: C) -> Result<String, minijinja::Error> {
    let env = minijinja::Environment::new();
    let template = env.template_from_str(source)?;
    template.render(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_interpolation() {
        let out = render(
            "rpcuser={{ rpcusername }}\nrpcpassword={{ rpcpassword }}",
            context! { rpcusername => "alice", rpcpassword => "s3cret" },
        )
        .unwrap();
        assert_eq!(out, "rpcuser=alice\nrpcpassword=s3cret");
    }

    #[test]
    fn test_conditional_block() {
        let source = "server=1\n{% if p2pPort %}port={{ p2pPort }}\n{% endif %}listen=1";
        assert_eq!(
            render(source, context! { p2pPort => 9999 }).unwrap(),
            "server=1\nport=9999\nlisten=1"
        );
        assert_eq!(render(source, context! {}).unwrap(), "server=1\nlisten=1");
    }

    #[test]
    fn test_undefined_renders_empty() {
        assert_eq!(render("user={{ missing }};", context! {}).unwrap(), "user=;");
    }

    #[test]
    fn test_nested_lookup() {
        let out = render(
            "[{{ blockchain }}]\nTitle={{ val.Title }}",
            context! { blockchain => "LTC", val => context! { Title => "Litecoin" } },
        )
        .unwrap();
        assert_eq!(out, "[LTC]\nTitle=Litecoin");
    }

    #[test]
    fn test_syntax_error() {
        assert!(render("{% if %}", context! {}).is_err());
    }
}
