//! Shared helpers for inspecting generated expressions

#![allow(dead_code)]

use mathgen::alphabet::{is_operator, is_terminal};
use mathgen::ExpressionNode;

/// Split an expression into operator/terminal tokens, dropping parentheses.
pub fn tokens(expression: &str) -> Vec<String> {
    expression
        .replace(['(', ')'], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Abstract shape: terminals become `N`, operators `o`, parentheses kept.
pub fn shape(expression: &str) -> String {
    expression
        .replace('(', "( ")
        .replace(')', " )")
        .split_whitespace()
        .map(|token| match token {
            "(" | ")" => token,
            t if is_operator(t) => "o",
            t if is_terminal(t) => "N",
            other => panic!("unexpected token {:?} in {:?}", other, expression),
        })
        .collect::<Vec<_>>()
        .join(" ")
        .replace("( ", "(")
        .replace(" )", ")")
}

/// Parentheses open and close in order and all close.
pub fn balanced(expression: &str) -> bool {
    let mut open = 0usize;
    for ch in expression.chars() {
        match ch {
            '(' => open += 1,
            ')' => {
                if open == 0 {
                    return false;
                }
                open -= 1;
            }
            _ => {}
        }
    }
    open == 0
}

/// The first `(` closes at the very last character.
pub fn fully_wrapped(expression: &str) -> bool {
    if !expression.starts_with('(') {
        return false;
    }
    let mut open = 0usize;
    for (idx, ch) in expression.char_indices() {
        match ch {
            '(' => open += 1,
            ')' => {
                open -= 1;
                if open == 0 {
                    return idx == expression.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Operators that sit outside every parenthesis pair.
pub fn top_level_operators(expression: &str) -> usize {
    let mut open = 0usize;
    let mut count = 0;
    for token in expression.replace('(', "( ").replace(')', " )").split_whitespace() {
        match token {
            "(" => open += 1,
            ")" => open -= 1,
            t if open == 0 && is_operator(t) => count += 1,
            _ => {}
        }
    }
    count
}

/// Internal nodes whose sub-expression will be parenthesized when folded.
/// The root never is.
pub fn wrapped_nodes(root: &ExpressionNode) -> usize {
    root.iter()
        .filter(|node| !node.is_terminal() && node.depth > 0 && node.wrap_in_parens)
        .count()
}

/// Operator nodes in the tree.
pub fn internal_nodes(root: &ExpressionNode) -> usize {
    root.iter().filter(|node| !node.is_terminal()).count()
}
