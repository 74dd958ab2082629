//! Checking and rendering of single setting accessors.

use setgen_core::{Setting, SettingKind, format_literal, normalize, validate_identifier};

/// How accessors obtain their value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Access {
    /// `public const T NAME = literal;`
    Const,
    /// `public static T NAME => lookup<T>("raw name");`
    Lookup(String),
}

/// A setting that passed every check and can be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Accessor<'a> {
    pub identifier: String,
    pub setting: &'a Setting,
}

impl<'a> Accessor<'a> {
    /// Check a setting and derive its identifier.
    ///
    /// `container` is the name of the type the accessor is emitted into;
    /// C# forbids members named like their enclosing type. The stored value
    /// is only checked for [`Access::Const`], the one form that embeds it.
    pub fn check(setting: &'a Setting, container: &str, access: &Access) -> Result<Self, String> {
        let identifier = normalize(setting.raw_name());
        if identifier.is_empty() {
            return Err(format!(
                "setting name '{}' has no characters usable in an identifier",
                setting.raw_name()
            ));
        }
        if let Some(reason) = validate_identifier(&identifier) {
            return Err(format!(
                "setting name '{}' becomes '{}': {}",
                setting.raw_name(),
                identifier,
                reason
            ));
        }
        if identifier == container {
            return Err(format!(
                "setting name '{}' becomes '{}', the name of its containing type",
                setting.raw_name(),
                identifier
            ));
        }
        if *access == Access::Const {
            check_literal(setting.kind(), setting.literal_value()).map_err(|reason| {
                format!(
                    "setting '{}' has an invalid {} value {}: {}",
                    setting.raw_name(),
                    setting.kind(),
                    setting.literal_value(),
                    reason
                )
            })?;
        }

        Ok(Self {
            identifier,
            setting,
        })
    }

    /// The declaration line, without documentation.
    pub fn render(&self, access: &Access) -> String {
        let ty = self.setting.kind().as_str();
        match access {
            Access::Const => format!(
                "public const {} {} = {};",
                ty,
                self.identifier,
                self.setting.literal_value()
            ),
            Access::Lookup(lookup) => format!(
                "public static {} {} => {}<{}>({});",
                ty,
                self.identifier,
                lookup,
                ty,
                format_literal(SettingKind::String, self.setting.raw_name())
            ),
        }
    }

    /// The `<summary>` documentation block.
    pub fn doc(&self) -> String {
        let description = escape_xml(self.setting.description().trim());
        let summary = if description.is_empty() {
            "[Source-Generated] Global setting.".to_string()
        } else {
            format!("[Source-Generated] Global setting. {}", description)
        };
        format!("<summary>\n{}\n</summary>", summary)
    }
}

/// An inline error comment standing in for generated code.
pub(crate) fn error_comment(message: &str) -> String {
    format!("/*Error: {}*/", message.replace("*/", "* /"))
}

fn check_literal(kind: SettingKind, literal: &str) -> Result<(), &'static str> {
    match kind {
        SettingKind::Bool => match literal {
            "true" | "false" => Ok(()),
            _ => Err("expected true or false"),
        },
        SettingKind::Int => literal
            .parse::<i32>()
            .map(|_| ())
            .map_err(|_| "not a 32-bit integer"),
        SettingKind::Float => match literal.strip_suffix('f') {
            Some(number) if is_decimal_number(number) => Ok(()),
            _ => Err("not a decimal number"),
        },
        SettingKind::String => {
            if literal.len() >= 2 && literal.starts_with('"') && literal.ends_with('"') {
                Ok(())
            } else {
                Err("expected a quoted string")
            }
        }
    }
}

/// `[+-]digits[.digits][(e|E)[+-]digits]`, with digits on at least one side
/// of the point. C# rejects forms like `5.f`, so the fraction cannot be empty.
fn is_decimal_number(text: &str) -> bool {
    let text = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = match mantissa.split_once('.') {
        Some((whole, fraction)) => {
            all_digits(fraction) && (whole.is_empty() || all_digits(whole))
        }
        None => all_digits(mantissa),
    };
    let exponent_ok = match exponent {
        Some(exponent) => all_digits(exponent.strip_prefix(['+', '-']).unwrap_or(exponent)),
        None => true,
    };

    mantissa_ok && exponent_ok
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
