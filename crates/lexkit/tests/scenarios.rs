//! End-to-end scenarios: a small nested-list grammar driven through the
//! cursor, with failures rendered by the presenter.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use lexkit::{
    matchers, messages, ColorPolicy, Cursor, Message, ParseError, Presenter, PresenterOptions,
    Theme,
};
use pretty_assertions::assert_eq;

static EXPECTED_CLOSE: Message = Message::error("expected `]`").with_code("T0001");
static EXPECTED_ITEM: Message = Message::error("expected a number or a list")
    .with_code("T0002")
    .with_url("https://lexkit.dev/T0002");

#[derive(Debug, PartialEq)]
enum Item {
    Number(i64),
    List(Vec<Item>),
}

fn ws(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    cursor.skip(matchers::ascii_whitespace(cursor.rest()))
}

fn item(cursor: &mut Cursor<'_>) -> Result<Item, ParseError> {
    if let Some(number) = cursor.maybe(matchers::integer::<i64>(cursor.rest()))? {
        return Ok(Item::Number(number.value));
    }
    if cursor.maybe(matchers::literal(cursor.rest(), b"["))?.is_some() {
        return list_tail(cursor).map(Item::List);
    }
    let span = cursor.here(1);
    Err(cursor.fail(&EXPECTED_ITEM, span))
}

/// Items after an opening `[`, through the closing `]`.
fn list_tail(cursor: &mut Cursor<'_>) -> Result<Vec<Item>, ParseError> {
    let mut items = Vec::new();
    ws(cursor)?;
    if cursor.maybe(matchers::literal(cursor.rest(), b"]"))?.is_some() {
        return Ok(items);
    }
    loop {
        items.push(item(cursor)?);
        ws(cursor)?;
        if cursor.maybe(matchers::literal(cursor.rest(), b","))?.is_none() {
            break;
        }
        ws(cursor)?;
    }
    cursor.must(matchers::literal(cursor.rest(), b"]"), &EXPECTED_CLOSE)?;
    Ok(items)
}

fn document(cursor: &mut Cursor<'_>) -> Result<Item, ParseError> {
    ws(cursor)?;
    let value = item(cursor)?;
    ws(cursor)?;
    cursor.must(matchers::end_of_input(cursor.rest()), &messages::EXPECTED_END_OF_INPUT)?;
    Ok(value)
}

fn render(cursor: &Cursor<'_>, options: PresenterOptions) -> String {
    let failure = cursor.failure().unwrap();
    let mut presenter = Presenter::new(Vec::new(), options);
    presenter
        .present_failure(&failure, cursor.source(), "data/input.lst")
        .unwrap();
    String::from_utf8(presenter.into_inner()).unwrap()
}

#[test]
fn nested_lists_share_one_cursor() {
    let mut cursor = Cursor::from("[1, [2, -3], []]\n");
    let parsed = document(&mut cursor).unwrap();
    assert_eq!(
        parsed,
        Item::List(vec![
            Item::Number(1),
            Item::List(vec![Item::Number(2), Item::Number(-3)]),
            Item::List(vec![]),
        ])
    );
    assert!(cursor.is_done());
    assert_eq!(cursor.line(), 1);
}

#[test]
fn overflow_inside_nested_list() {
    let source = "[\n  1,\n  [99999999999999999999]\n]";
    let mut cursor = Cursor::from(source);
    assert!(document(&mut cursor).is_err());

    let failure = cursor.failure().unwrap();
    assert!(failure.is(&messages::INTEGER_TOO_LARGE));
    assert_eq!((failure.span.line, failure.span.column), (2, 3));

    assert_eq!(
        render(&cursor, PresenterOptions::plain()),
        "Error [L0001] in data/input.lst:3:4: integer too large\n"
    );
}

#[test]
fn missing_close_renders_expanded() {
    let source = "[1, 2";
    let mut cursor = Cursor::from(source);
    assert!(document(&mut cursor).is_err());
    assert!(cursor.failure().unwrap().is(&EXPECTED_CLOSE));

    static NOOP: Theme = Theme::NOOP;
    let text = render(&cursor, PresenterOptions::new(true, &NOOP));
    let expected = [
        "╭─ Preview of input.lst\n",
        "│ 1 │ [1, 2\n",
        "│   │      \n",
        "├─ Error [T0001] in data/input.lst:1:6\n",
        "│ expected `]`\n",
        "│\n",
        "│ File: data/input.lst\n",
        "│ Line: 1\n",
        "│ Code: T0001\n",
        "╰─\n",
    ]
    .concat();
    assert_eq!(text, expected);
}

#[test]
fn bad_item_carries_url() {
    let mut cursor = Cursor::from("[1, x]");
    assert!(document(&mut cursor).is_err());
    let failure = cursor.failure().unwrap();
    assert!(failure.is(&EXPECTED_ITEM));
    assert_eq!(cursor.slice_from_span(failure.span), b"x");

    static NOOP: Theme = Theme::NOOP;
    let text = render(&cursor, PresenterOptions::new(true, &NOOP));
    assert!(text.contains("│ URL: https://lexkit.dev/T0002\n╰─\n"));
}

#[test]
fn trailing_input_is_rejected() {
    let mut cursor = Cursor::from("[] []");
    assert!(document(&mut cursor).is_err());
    let failure = cursor.failure().unwrap();
    assert!(failure.is(&messages::EXPECTED_END_OF_INPUT));
    assert_eq!(failure.span.column, 3);
}

#[test]
fn independent_parses_use_fresh_cursors() {
    let mut first = Cursor::from("[");
    let mut second = Cursor::from("[7]");
    assert!(document(&mut first).is_err());
    assert_eq!(document(&mut second).unwrap(), Item::List(vec![Item::Number(7)]));
    assert!(first.is_failed());
    assert!(!second.is_failed());
}

#[test]
fn suppressed_color_on_pipe_is_simple_and_plain() {
    let policy = ColorPolicy::from_signals(true, true);
    let options = PresenterOptions::resolve(policy, false);

    let mut cursor = Cursor::from("[1,, 2]");
    assert!(document(&mut cursor).is_err());
    let text = render(&cursor, options);
    assert!(!text.contains('\x1b'));
    assert_eq!(
        text,
        "Error [T0002] in data/input.lst:1:4: expected a number or a list\n"
    );
}

#[test]
fn init_tracing_is_idempotent() {
    lexkit::init_tracing();
    lexkit::init_tracing();
}
