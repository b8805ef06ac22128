use super::*;

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    children_method!(values, Value);
}

// ============================================================================
// Values
// ============================================================================

/// Any Ion value, annotated or not
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Struct(Struct),
    List(List),
    Sexp(Sexp),
    Symbol(SymbolValue),
    Scalar(Scalar),
}

impl AstNode for Value {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_value()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::STRUCT => Some(Self::Struct(Struct(node))),
            SyntaxKind::LIST => Some(Self::List(List(node))),
            SyntaxKind::SEXP => Some(Self::Sexp(Sexp(node))),
            SyntaxKind::SYMBOL_VALUE => Some(Self::Symbol(SymbolValue(node))),
            SyntaxKind::SCALAR => Some(Self::Scalar(Scalar(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Struct(n) => n.syntax(),
            Self::List(n) => n.syntax(),
            Self::Sexp(n) => n.syntax(),
            Self::Symbol(n) => n.syntax(),
            Self::Scalar(n) => n.syntax(),
        }
    }
}

impl Value {
    /// Annotations in source order
    pub fn annotations(&self) -> impl Iterator<Item = Annotation> + '_ {
        self.syntax().children().filter_map(Annotation::cast)
    }

    /// Check if any annotation resolves to `text`
    pub fn has_annotation(&self, text: &str) -> bool {
        self.annotations()
            .any(|a| matches!(a.text(), Ok(Some(t)) if t.as_str() == text))
    }

    pub fn is_annotated(&self) -> bool {
        self.annotations().next().is_some()
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&SymbolValue> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a list or s-expression; empty for other values.
    pub fn sequence_elements(&self) -> Vec<Value> {
        match self {
            Self::List(l) => l.elements().collect(),
            Self::Sexp(s) => s.elements().collect(),
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Annotations
// ============================================================================

ast_node!(Annotation, ANNOTATION);

impl Annotation {
    /// The annotation's symbol text; `None` for `$0`
    pub fn text(&self) -> Result<Option<SmolStr>, TextError> {
        node_text(&self.0)
    }
}

// ============================================================================
// Containers
// ============================================================================

ast_node!(Struct, STRUCT);

impl Struct {
    children_method!(fields, Field);

    /// Value of the first field named `name`
    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields()
            .find(|f| f.name().is_some_and(|n| matches!(n.text(), Ok(Some(t)) if t.as_str() == name)))
            .and_then(|f| f.value())
    }

    /// Values of every field named `name`, in source order
    pub fn fields_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Value> + 'a {
        self.fields()
            .filter(move |f| f.name().is_some_and(|n| matches!(n.text(), Ok(Some(t)) if t.as_str() == name)))
            .filter_map(|f| f.value())
    }
}

ast_node!(Field, FIELD);

impl Field {
    first_child_method!(name, FieldName);
    first_child_method!(value, Value);
}

ast_node!(FieldName, FIELD_NAME);

impl FieldName {
    /// The field name's symbol text; `None` for `$0`
    pub fn text(&self) -> Result<Option<SmolStr>, TextError> {
        node_text(&self.0)
    }
}

ast_node!(List, LIST);

impl List {
    children_method!(elements, Value);
}

ast_node!(Sexp, SEXP);

impl Sexp {
    children_method!(elements, Value);
}

// ============================================================================
// Scalars
// ============================================================================

ast_node!(SymbolValue, SYMBOL_VALUE);

impl SymbolValue {
    /// The symbol's text; `None` for `$0`
    pub fn text(&self) -> Result<Option<SmolStr>, TextError> {
        node_text(&self.0)
    }

    /// Check if the symbol was written as an operator inside an s-expression
    pub fn is_operator(&self) -> bool {
        significant_tokens(&self.0).any(|t| t.kind() == SyntaxKind::OPERATOR)
    }

    /// Check if the symbol was written unquoted as an identifier
    pub fn is_identifier(&self) -> bool {
        significant_tokens(&self.0).any(|t| t.kind() == SyntaxKind::IDENT)
    }
}

ast_node!(Scalar, SCALAR);

impl Scalar {
    /// Token kind of the scalar, e.g. `INT` or `TYPED_NULL`
    pub fn kind(&self) -> SyntaxKind {
        significant_tokens(&self.0)
            .find(|t| t.kind().is_scalar_token())
            .map(|t| t.kind())
            .unwrap_or(SyntaxKind::ERROR)
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind(), SyntaxKind::NULL_KW | SyntaxKind::TYPED_NULL)
    }

    /// Decoded text of a string scalar; `None` for every other scalar
    pub fn string_text(&self) -> Option<Result<SmolStr, TextError>> {
        match self.kind() {
            SyntaxKind::STRING | SyntaxKind::LONG_STRING => {
                Some(node_text(&self.0).map(Option::unwrap_or_default))
            }
            _ => None,
        }
    }

    /// Source text of the scalar without annotations or trivia
    pub fn source_text(&self) -> String {
        significant_tokens(&self.0)
            .filter(|t| t.kind().is_scalar_token())
            .map(|t| t.text().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
