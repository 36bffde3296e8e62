//! Built-in converters for scalars, text, maps, lists and raw nodes.
//!
//! Every built-in maps `Node::Null` to `None`. A node whose shape already is
//! the target passes through; the only other source they accept is text.

use nodepath_core::grammar::{is_decimal_number, is_whole_number};
use nodepath_core::{List, Map, Node};

use crate::converter::{Converted, Converter};
use crate::registry::ConverterRegistry;

const TRUE_WORDS: [&str; 6] = ["1", "t", "y", "yes", "true", "ok"];
const FALSE_WORDS: [&str; 6] = ["0", "f", "n", "no", "false", "nok"];

// Longest text worth parsing, sign included.
const MAX_I32_TEXT: usize = 11;
const MAX_I64_TEXT: usize = 21;

pub(crate) fn register_builtins(registry: &mut ConverterRegistry) {
    registry.register(BoolConverter);
    registry.register(CharConverter);
    registry.register(I8Converter);
    registry.register(I16Converter);
    registry.register(I32Converter);
    registry.register(I64Converter);
    registry.register(F32Converter);
    registry.register(F64Converter);
    registry.register(StringConverter);
    registry.register(MapConverter);
    registry.register(ListConverter);
    registry.register(NodeConverter);
}

/// `Bool`, or a short yes/no word in any letter case.
pub struct BoolConverter;

impl Converter for BoolConverter {
    type Output = bool;

    fn convert(&self, node: &Node) -> Option<bool> {
        match node {
            Node::Bool(b) => Some(*b),
            Node::String(s) if s.len() <= 5 => {
                if TRUE_WORDS.iter().any(|w| s.eq_ignore_ascii_case(w)) {
                    Some(true)
                } else if FALSE_WORDS.iter().any(|w| s.eq_ignore_ascii_case(w)) {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Text of exactly one UTF-16 code unit.
///
/// Characters outside the Basic Multilingual Plane (emoji and the like) take
/// a surrogate pair and are rejected.
pub struct CharConverter;

impl Converter for CharConverter {
    type Output = char;

    fn convert(&self, node: &Node) -> Option<char> {
        let mut chars = node.as_str()?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.len_utf16() == 1 => Some(c),
            _ => None,
        }
    }
}

pub struct I8Converter;

impl Converter for I8Converter {
    type Output = i8;

    fn convert(&self, node: &Node) -> Option<i8> {
        match node {
            Node::Integer(i) => i8::try_from(*i).ok(),
            Node::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

pub struct I16Converter;

impl Converter for I16Converter {
    type Output = i16;

    fn convert(&self, node: &Node) -> Option<i16> {
        match node {
            Node::Integer(i) => i16::try_from(*i).ok(),
            Node::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Integers in range, or whole-number text of at most 11 bytes.
pub struct I32Converter;

impl Converter for I32Converter {
    type Output = i32;

    fn convert(&self, node: &Node) -> Option<i32> {
        match node {
            Node::Integer(i) => i32::try_from(*i).ok(),
            Node::String(s) if s.len() <= MAX_I32_TEXT && is_whole_number(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Integers, or whole-number text of at most 21 bytes.
pub struct I64Converter;

impl Converter for I64Converter {
    type Output = i64;

    fn convert(&self, node: &Node) -> Option<i64> {
        match node {
            Node::Integer(i) => Some(*i),
            Node::String(s) if s.len() <= MAX_I64_TEXT && is_whole_number(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Floats (narrowed), or decimal text.
pub struct F32Converter;

impl Converter for F32Converter {
    type Output = f32;

    fn convert(&self, node: &Node) -> Option<f32> {
        match node {
            Node::Float(f) => Some(*f as f32),
            Node::String(s) if is_decimal_number(s) => s.parse().ok(),
            _ => None,
        }
    }
}

pub struct F64Converter;

impl Converter for F64Converter {
    type Output = f64;

    fn convert(&self, node: &Node) -> Option<f64> {
        match node {
            Node::Float(f) => Some(*f),
            Node::String(s) if is_decimal_number(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Text as is; anything else non-null via its `Display` rendering.
pub struct StringConverter;

impl Converter for StringConverter {
    type Output = String;

    fn convert(&self, node: &Node) -> Option<String> {
        match node {
            Node::Null => None,
            Node::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

pub struct MapConverter;

impl Converter for MapConverter {
    type Output = Map;

    fn convert(&self, node: &Node) -> Option<Map> {
        node.as_map().cloned()
    }

    fn convert_ref<'a>(&self, node: &'a Node) -> Option<Converted<'a, Map>> {
        node.as_map().map(Converted::Borrowed)
    }
}

pub struct ListConverter;

impl Converter for ListConverter {
    type Output = List;

    fn convert(&self, node: &Node) -> Option<List> {
        node.as_array().cloned()
    }

    fn convert_ref<'a>(&self, node: &'a Node) -> Option<Converted<'a, List>> {
        node.as_array().map(Converted::Borrowed)
    }
}

/// Any non-null node, untouched.
pub struct NodeConverter;

impl Converter for NodeConverter {
    type Output = Node;

    fn convert(&self, node: &Node) -> Option<Node> {
        match node {
            Node::Null => None,
            other => Some(other.clone()),
        }
    }

    fn convert_ref<'a>(&self, node: &'a Node) -> Option<Converted<'a, Node>> {
        match node {
            Node::Null => None,
            other => Some(Converted::Borrowed(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    fn text(s: &str) -> Node {
        Node::from(s)
    }

    #[test]
    fn null_is_absent_everywhere() {
        assert_eq!(BoolConverter.convert(&Node::Null), None);
        assert_eq!(CharConverter.convert(&Node::Null), None);
        assert_eq!(I8Converter.convert(&Node::Null), None);
        assert_eq!(I16Converter.convert(&Node::Null), None);
        assert_eq!(I32Converter.convert(&Node::Null), None);
        assert_eq!(I64Converter.convert(&Node::Null), None);
        assert_eq!(F32Converter.convert(&Node::Null), None);
        assert_eq!(F64Converter.convert(&Node::Null), None);
        assert_eq!(StringConverter.convert(&Node::Null), None);
        assert_eq!(MapConverter.convert(&Node::Null), None);
        assert_eq!(ListConverter.convert(&Node::Null), None);
        assert_eq!(NodeConverter.convert(&Node::Null), None);
    }

    #[test]
    fn identity_pass_through() {
        assert_eq!(BoolConverter.convert(&Node::Bool(false)), Some(false));
        assert_eq!(I64Converter.convert(&Node::Integer(i64::MIN)), Some(i64::MIN));
        assert_eq!(I32Converter.convert(&Node::Integer(-7)), Some(-7));
        assert_eq!(F64Converter.convert(&Node::Float(0.5)), Some(0.5));
        assert_eq!(F32Converter.convert(&Node::Float(0.5)), Some(0.5f32));
        assert_eq!(StringConverter.convert(&text("hi")), Some("hi".to_string()));

        let map = btree! { "k".to_string() => Node::from(1) };
        assert_eq!(MapConverter.convert(&Node::Map(map.clone())), Some(map));
        let list = vec![Node::from(1), Node::from("two")];
        assert_eq!(ListConverter.convert(&Node::Array(list.clone())), Some(list));
        assert_eq!(NodeConverter.convert(&text("x")), Some(text("x")));
    }

    #[test]
    fn bool_words() {
        for word in ["1", "t", "Y", "yes", "TRUE", "Ok"] {
            assert_eq!(BoolConverter.convert(&text(word)), Some(true), "{word}");
        }
        for word in ["0", "F", "n", "No", "false", "NOK"] {
            assert_eq!(BoolConverter.convert(&text(word)), Some(false), "{word}");
        }
        for word in ["maybe", "", "yess", "truey", "2"] {
            assert_eq!(BoolConverter.convert(&text(word)), None, "{word}");
        }
        assert_eq!(BoolConverter.convert(&Node::Integer(1)), None);
    }

    #[test]
    fn char_needs_one_character() {
        assert_eq!(CharConverter.convert(&text("x")), Some('x'));
        assert_eq!(CharConverter.convert(&text("é")), Some('é'));
        assert_eq!(CharConverter.convert(&text("")), None);
        assert_eq!(CharConverter.convert(&text("xy")), None);
        assert_eq!(CharConverter.convert(&Node::Integer(7)), None);
    }

    #[test]
    fn char_rejects_surrogate_pairs() {
        assert_eq!(CharConverter.convert(&text("\u{FFFF}")), Some('\u{FFFF}'));
        assert_eq!(CharConverter.convert(&text("😀")), None);
        assert_eq!(CharConverter.convert(&text("\u{10000}")), None);
    }

    #[test]
    fn containers_convert_by_reference() {
        let map = Node::Map(btree! { "k".to_string() => Node::from(1) });
        let list = Node::from(vec![1, 2]);

        match MapConverter.convert_ref(&map) {
            Some(Converted::Borrowed(m)) => assert!(std::ptr::eq(m, map.as_map().unwrap())),
            other => panic!("map was not borrowed: {other:?}"),
        }
        match ListConverter.convert_ref(&list) {
            Some(Converted::Borrowed(l)) => assert!(std::ptr::eq(l, list.as_array().unwrap())),
            other => panic!("list was not borrowed: {other:?}"),
        }
        match NodeConverter.convert_ref(&list) {
            Some(Converted::Borrowed(n)) => assert!(std::ptr::eq(n, &list)),
            other => panic!("node was not borrowed: {other:?}"),
        }
        assert_eq!(MapConverter.convert_ref(&list), None);
        assert_eq!(ListConverter.convert_ref(&map), None);
        assert_eq!(NodeConverter.convert_ref(&Node::Null), None);
    }

    #[test]
    fn small_integers_parse_directly() {
        assert_eq!(I8Converter.convert(&text("-128")), Some(i8::MIN));
        assert_eq!(I8Converter.convert(&text("+12")), Some(12));
        assert_eq!(I8Converter.convert(&text("128")), None);
        assert_eq!(I8Converter.convert(&Node::Integer(300)), None);
        assert_eq!(I16Converter.convert(&text("32767")), Some(i16::MAX));
        assert_eq!(I16Converter.convert(&text("1.0")), None);
        assert_eq!(I16Converter.convert(&Node::Integer(-5)), Some(-5));
    }

    #[test]
    fn i32_grammar_and_bounds() {
        assert_eq!(I32Converter.convert(&text("007")), Some(7));
        assert_eq!(I32Converter.convert(&text("-2147483648")), Some(i32::MIN));
        assert_eq!(I32Converter.convert(&text("2147483648")), None);
        assert_eq!(I32Converter.convert(&text("000000000001")), None);
        assert_eq!(I32Converter.convert(&text("not-a-number")), None);
        assert_eq!(I32Converter.convert(&text(" 7")), None);
        assert_eq!(I32Converter.convert(&Node::Integer(1 << 40)), None);
        assert_eq!(I32Converter.convert(&Node::Float(7.0)), None);
    }

    #[test]
    fn i64_grammar_and_bounds() {
        assert_eq!(
            I64Converter.convert(&text("-9223372036854775808")),
            Some(i64::MIN)
        );
        assert_eq!(I64Converter.convert(&text("9223372036854775808")), None);
        assert_eq!(I64Converter.convert(&text("0000000000000000000001")), None);
        assert_eq!(I64Converter.convert(&text("1e3")), None);
    }

    #[test]
    fn decimals() {
        assert_eq!(F64Converter.convert(&text("-1.25")), Some(-1.25));
        assert_eq!(F64Converter.convert(&text("3")), Some(3.0));
        assert_eq!(F64Converter.convert(&text("1e3")), None);
        assert_eq!(F64Converter.convert(&text(".5")), None);
        assert_eq!(F64Converter.convert(&text("NaN")), None);
        assert_eq!(F64Converter.convert(&Node::Integer(3)), None);
        assert_eq!(F32Converter.convert(&text("+2.5")), Some(2.5f32));
        assert_eq!(F32Converter.convert(&text("abc")), None);
    }

    #[test]
    fn strings_render_everything() {
        assert_eq!(StringConverter.convert(&Node::Integer(5)), Some("5".to_string()));
        assert_eq!(StringConverter.convert(&Node::Bool(true)), Some("true".to_string()));
        assert_eq!(
            StringConverter.convert(&Node::from(vec![1, 2])),
            Some("[1, 2]".to_string())
        );
    }

    #[test]
    fn no_structural_coercion() {
        assert_eq!(MapConverter.convert(&Node::array()), None);
        assert_eq!(MapConverter.convert(&text("{}")), None);
        assert_eq!(ListConverter.convert(&Node::map()), None);
        assert_eq!(ListConverter.convert(&text("[]")), None);
    }
}
