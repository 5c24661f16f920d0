/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks the tree produced by the parser in post-order and
/// applies each operator with IEEE double precision semantics. It cannot fail.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw input and produces a sequence of tokens, each
/// paired with its byte offset: numbers, operators, parentheses and the `log`
/// keyword.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Recognizes number literals with the configured decimal separator.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over five precedence tiers: primary,
/// power, log, multiplicative and additive.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Validates grammar, reporting errors with position info.
/// - Rejects tokens left over after a complete expression.
pub mod parser;
