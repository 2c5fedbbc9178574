//! Entrypoint generation.
//!
//! A run renders two templates: the protocol-independent `main` template and
//! the adapter registered for the selected protocol.

pub mod assembler;
pub mod templates;

pub use assembler::{
    assemble, render, BuildDirective, GeneratedOutput, RenderedFile, TARGET_PACKAGE,
};

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Substitution points a template may reference.
pub const TEMPLATE_FIELDS: [&str; 2] = ["Package", "Function"];

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

#[derive(Debug)]
pub struct Template {
    pub name: &'static str,
    pub body: &'static str,
}

/// Values inserted into a template.
#[derive(Clone, Copy, Debug)]
pub struct TemplateData<'a> {
    pub package: &'a str,
    pub function: &'a str,
}

impl Template {
    pub fn file_name(&self) -> String {
        format!("{}.go", self.name)
    }

    /// Names of the substitution points this template references.
    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDER
            .captures_iter(self.body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    pub fn render(&self, data: &TemplateData<'_>) -> Result<String> {
        let mut rendered = String::with_capacity(self.body.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(self.body) {
            let (Some(whole), Some(field)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = match field.as_str() {
                "Package" => data.package,
                "Function" => data.function,
                other => {
                    return Err(Error::Template {
                        template: self.name.to_string(),
                        message: format!("undeclared substitution point {other:?}"),
                    })
                }
            };
            rendered.push_str(&self.body[last..whole.start()]);
            rendered.push_str(value);
            last = whole.end();
        }

        rendered.push_str(&self.body[last..]);
        Ok(rendered)
    }
}

/// A delivery protocol and the adapter it is generated with.
#[derive(Debug)]
pub struct Protocol {
    pub id: &'static str,
    pub template: Template,
}

pub static MAIN_TEMPLATE: Template = Template {
    name: "main",
    body: templates::PACKAGE_MAIN,
};

// The first entry is the default protocol
static PROTOCOLS: [Protocol; 1] = [Protocol {
    id: "http",
    template: Template {
        name: "http",
        body: templates::PROTOCOL_HTTP,
    },
}];

pub fn protocols() -> impl Iterator<Item = &'static Protocol> {
    PROTOCOLS.iter()
}

pub fn protocol_ids() -> Vec<&'static str> {
    protocols().map(|p| p.id).collect()
}

pub fn default_protocol() -> &'static str {
    PROTOCOLS[0].id
}

/// Look up a protocol, failing with [`Error::UnsupportedProtocol`].
pub fn find_protocol(id: &str) -> Result<&'static Protocol> {
    protocols()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::UnsupportedProtocol {
            protocol: id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: TemplateData<'static> = TemplateData {
        package: "example.org/myfn",
        function: "Receiver",
    };

    #[test]
    fn test_templates_only_use_declared_fields() {
        let all = std::iter::once(&MAIN_TEMPLATE).chain(protocols().map(|p| &p.template));
        for template in all {
            for field in template.placeholders() {
                assert!(
                    TEMPLATE_FIELDS.contains(&field),
                    "{} uses {field}",
                    template.name
                );
            }
        }
    }

    #[test]
    fn test_main_template_substitutes_package_and_function() {
        let rendered = MAIN_TEMPLATE.render(&DATA).unwrap();
        assert!(rendered.contains("fn \"example.org/myfn\""));
        assert!(rendered.contains("client.StartReceiver(drainCtx, fn.Receiver)"));
        assert!(rendered.contains("signal.Notify(sigs, syscall.SIGTERM)"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_http_template_has_build_tag() {
        let http = find_protocol("http").unwrap();
        let rendered = http.template.render(&DATA).unwrap();
        assert!(rendered.contains("//go:build http"));
        assert_eq!(rendered, templates::PROTOCOL_HTTP);
    }

    #[test]
    fn test_render_rejects_undeclared_placeholder() {
        let template = Template {
            name: "broken",
            body: "package {{.Name}}",
        };
        let err = template.render(&DATA).unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
    }

    #[test]
    fn test_render_tolerates_spacing_in_placeholders() {
        let template = Template {
            name: "spaced",
            body: "{{ .Function }}/{{.Package}}",
        };
        assert_eq!(template.render(&DATA).unwrap(), "Receiver/example.org/myfn");
    }

    #[test]
    fn test_unknown_protocol() {
        assert!(matches!(
            find_protocol("matt"),
            Err(Error::UnsupportedProtocol { .. })
        ));
        assert_eq!(default_protocol(), "http");
    }
}
