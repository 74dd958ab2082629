//! Declaration extraction from C# source text.
//!
//! This is not a C# parser. It tracks namespaces and type bodies, collects
//! attribute lists and modifiers in front of type declarations, and skips
//! every other brace-delimited body wholesale. Anything it does not
//! recognise is ignored rather than reported.

use std::path::Path;

use crate::{
    Attribute, AttributeArg, Declaration, EnclosingType, TypeKeyword,
    lexer::{Token, tokenize},
};

const MODIFIERS: &[&str] = &[
    "public", "private", "protected", "internal", "static", "partial", "sealed", "abstract",
    "readonly", "unsafe", "new", "file", "ref",
];

/// Read every class, struct and record declaration in a C# file.
pub fn read_declarations(path: &Path, source: &str) -> Vec<Declaration> {
    let tokens = tokenize(source);
    let mut reader = Reader {
        tokens: &tokens,
        pos: 0,
        file: path,
        file_namespace: None,
        scopes: Vec::new(),
        pending: Pending::default(),
        declarations: Vec::new(),
    };
    reader.run();
    reader.declarations
}

enum Scope {
    Namespace(String),
    Type(EnclosingType),
}

/// Attributes and modifiers seen since the last member boundary.
#[derive(Default)]
struct Pending {
    attributes: Vec<Attribute>,
    modifiers: Vec<String>,
    /// Set once anything other than attributes and modifiers appears.
    dirty: bool,
}

struct Reader<'a> {
    tokens: &'a [Token],
    pos: usize,
    file: &'a Path,
    file_namespace: Option<String>,
    scopes: Vec<Scope>,
    pending: Pending,
    declarations: Vec<Declaration>,
}

impl<'a> Reader<'a> {
    fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    fn run(&mut self) {
        while let Some(token) = self.peek(0) {
            match token {
                Token::Punct('[') if !self.pending.dirty => {
                    if !self.read_attribute_list() {
                        self.pending.dirty = true;
                    }
                }
                Token::Punct('{') => {
                    self.skip_balanced('{', '}');
                    self.reset();
                }
                Token::Punct('(') => {
                    self.skip_balanced('(', ')');
                    self.pending.dirty = true;
                }
                Token::Punct('}') => {
                    self.scopes.pop();
                    self.pos += 1;
                    self.reset();
                }
                Token::Punct(';') => {
                    self.pos += 1;
                    self.reset();
                }
                Token::Ident(word) if !self.pending.dirty => {
                    let word = word.clone();
                    self.read_word(&word);
                }
                _ => {
                    self.pos += 1;
                    self.pending.dirty = true;
                }
            }
        }
    }

    fn reset(&mut self) {
        self.pending = Pending::default();
    }

    fn read_word(&mut self, word: &str) {
        match word {
            "namespace" => self.read_namespace(),
            "class" => self.read_type(TypeKeyword::Class, 1),
            "struct" => self.read_type(TypeKeyword::Struct, 1),
            "record" => match self.peek(1).and_then(Token::ident) {
                Some("struct") => self.read_type(TypeKeyword::RecordStruct, 2),
                Some("class") => self.read_type(TypeKeyword::Record, 2),
                _ => self.read_type(TypeKeyword::Record, 1),
            },
            "interface" | "enum" => self.read_opaque(),
            _ if MODIFIERS.contains(&word) => {
                self.pending.modifiers.push(word.to_string());
                self.pos += 1;
            }
            _ => {
                self.pos += 1;
                self.pending.dirty = true;
            }
        }
    }

    fn read_namespace(&mut self) {
        self.pos += 1;
        let name = self.read_qualified_name().unwrap_or_default();

        match self.peek(0) {
            Some(Token::Punct(';')) => {
                self.pos += 1;
                self.file_namespace = Some(name);
            }
            Some(Token::Punct('{')) => {
                self.pos += 1;
                self.scopes.push(Scope::Namespace(name));
            }
            _ => {}
        }
        self.reset();
    }

    /// Read a type header and, when it has a body, enter it.
    fn read_type(&mut self, keyword: TypeKeyword, keyword_tokens: usize) {
        self.pos += keyword_tokens;
        let Some(name) = self.peek(0).and_then(Token::ident).map(str::to_string) else {
            self.pending.dirty = true;
            return;
        };
        self.pos += 1;

        // Generic parameters, primary constructors, base lists, constraints
        let has_body = loop {
            match self.peek(0) {
                None => break false,
                Some(Token::Punct('{')) => break true,
                Some(Token::Punct(';')) => break false,
                Some(Token::Punct('(')) => self.skip_balanced('(', ')'),
                Some(_) => self.pos += 1,
            }
        };

        let pending = std::mem::take(&mut self.pending);
        let declaration = Declaration {
            namespace: self.namespace(),
            enclosing: self.enclosing(),
            name: name.clone(),
            keyword,
            modifiers: pending.modifiers.clone(),
            file: self.file.to_path_buf(),
            attributes: pending.attributes,
        };
        tracing::trace!(name = %declaration.qualified_name(), "read declaration");
        self.declarations.push(declaration);

        // Consume the `{` or `;`
        self.pos += 1;
        if has_body {
            self.scopes.push(Scope::Type(EnclosingType {
                name,
                keyword,
                modifiers: pending.modifiers,
            }));
        }
    }

    fn read_opaque(&mut self) {
        loop {
            match self.peek(0) {
                None => return,
                Some(Token::Punct('{')) => {
                    self.skip_balanced('{', '}');
                    break;
                }
                Some(Token::Punct(';')) => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.pos += 1,
            }
        }
        self.reset();
    }

    fn namespace(&self) -> Option<String> {
        let blocks = self.scopes.iter().filter_map(|scope| match scope {
            Scope::Namespace(name) => Some(name.as_str()),
            Scope::Type(_) => None,
        });
        let parts: Vec<&str> = self.file_namespace.as_deref().into_iter().chain(blocks).collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("."))
        }
    }

    fn enclosing(&self) -> Vec<EnclosingType> {
        self.scopes
            .iter()
            .filter_map(|scope| match scope {
                Scope::Type(outer) => Some(outer.clone()),
                Scope::Namespace(_) => None,
            })
            .collect()
    }

    /// Skip from an opening delimiter to just past its match.
    fn skip_balanced(&mut self, open: char, close: char) {
        let mut depth = 0usize;
        while let Some(token) = self.peek(0) {
            self.pos += 1;
            if token.is_punct(open) {
                depth += 1;
            } else if token.is_punct(close) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
        }
    }

    /// `Ident ((. | ::) Ident)*`, joined as written.
    fn read_qualified_name(&mut self) -> Option<String> {
        let mut name = self.peek(0)?.ident()?.to_string();
        self.pos += 1;

        loop {
            let separator = match (self.peek(0), self.peek(1)) {
                (Some(Token::Punct('.')), _) => ".",
                (Some(Token::Punct(':')), Some(Token::Punct(':'))) => "::",
                _ => break,
            };
            let width = separator.len();
            let Some(segment) = self.peek(width).and_then(Token::ident) else {
                break;
            };
            name.push_str(separator);
            name.push_str(segment);
            self.pos += width + 1;
        }

        Some(name)
    }

    /// Read `[target: A(args), B]`. Returns `false`, with the cursor
    /// restored, when the brackets do not hold an attribute list.
    fn read_attribute_list(&mut self) -> bool {
        let start = self.pos;
        match self.parse_attribute_list() {
            Some(attributes) => {
                self.pending.attributes.extend(attributes);
                true
            }
            None => {
                self.pos = start + 1;
                false
            }
        }
    }

    fn parse_attribute_list(&mut self) -> Option<Vec<Attribute>> {
        self.pos += 1;

        // `[assembly: ...]` and friends do not apply to the next type.
        let mut applies_to_type = true;
        if let (Some(Token::Ident(target)), Some(Token::Punct(':'))) = (self.peek(0), self.peek(1)) {
            if !self.peek(2).is_some_and(|t| t.is_punct(':')) {
                applies_to_type = target == "type";
                self.pos += 2;
            }
        }

        let mut attributes = Vec::new();
        loop {
            let mut attribute = Attribute::new(self.read_qualified_name()?);
            if self.peek(0).is_some_and(|t| t.is_punct('(')) {
                self.read_attribute_args(&mut attribute)?;
            }
            attributes.push(attribute);

            match self.peek(0)? {
                Token::Punct(',') => self.pos += 1,
                Token::Punct(']') => {
                    self.pos += 1;
                    break;
                }
                _ => return None,
            }
        }

        Some(if applies_to_type { attributes } else { Vec::new() })
    }

    fn read_attribute_args(&mut self, attribute: &mut Attribute) -> Option<()> {
        self.pos += 1;
        let mut current: Vec<Token> = Vec::new();
        let mut depth = 0usize;

        loop {
            let token = self.peek(0)?.clone();
            self.pos += 1;
            match token {
                Token::Punct('(' | '[' | '{') => depth += 1,
                Token::Punct(')') if depth == 0 => {
                    push_arg(attribute, &current);
                    return Some(());
                }
                Token::Punct(',') if depth == 0 => {
                    push_arg(attribute, &current);
                    current.clear();
                    continue;
                }
                Token::Punct(')' | ']' | '}') => depth = depth.saturating_sub(1),
                _ => {}
            }
            current.push(token);
        }
    }
}

fn push_arg(attribute: &mut Attribute, tokens: &[Token]) {
    match tokens {
        [] => {}
        [Token::Ident(name), Token::Punct('='), value @ ..] => {
            attribute.named.push((name.clone(), to_arg(value)));
        }
        [Token::Ident(_), Token::Punct(':'), value @ ..] => attribute.args.push(to_arg(value)),
        value => attribute.args.push(to_arg(value)),
    }
}

fn to_arg(tokens: &[Token]) -> AttributeArg {
    match tokens {
        [Token::Str(value)] => AttributeArg::String(value.clone()),
        _ => AttributeArg::Expr(
            tokens
                .iter()
                .map(Token::text)
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}
