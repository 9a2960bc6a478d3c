use indoc::indoc;
use ptkit_format::{format, parse_snippet, Snippet, SnippetError, Val, WhitespaceMode};

fn snippet(source: &str) -> Val {
	Val::Snippet(Snippet::new(source))
}

#[test]
fn outdent_by_default() {
	let source = indoc! {"
		render(function () {
		    /*<<<LIST
		        <ul>
		            <li>%s</li>
		        </ul>
		    LIST*/
		});
	"};
	assert_eq!(
		format(&[snippet(source), "first".into()]).unwrap(),
		"<ul>\n    <li>first</li>\n</ul>"
	);
}

#[test]
fn trim_mode() {
	let source = indoc! {"
		render(function () {
		    /*<<<MSG;WS-TRIM

		        Total: %d
		            items

		    MSG*/
		});
	"};
	assert_eq!(
		format(&[snippet(source), Val::from(3)]).unwrap(),
		"Total: 3\nitems"
	);
}

#[test]
fn keep_mode_preserves_everything() {
	let source = "head\n  /*<<<K;KEEP\n    %s\n\n  K*/";
	assert_eq!(format(&[snippet(source), "x".into()]).unwrap(), "    x\n");
}

#[test]
fn soft_failures() {
	insta::assert_snapshot!(
		format(&[snippet("no markers at all")]).unwrap(),
		@"FORMAT_ERROR:snippet: begin marker line not found"
	);
	insta::assert_snapshot!(
		format(&[snippet("/*<<<T\nbody\nT*/")]).unwrap(),
		@"FORMAT_ERROR:snippet: begin marker line not found"
	);
	insta::assert_snapshot!(
		format(&[snippet("x\n/*<<<T\nbody\n")]).unwrap(),
		@"FORMAT_ERROR:snippet: end marker line not found for tag T"
	);
	insta::assert_snapshot!(
		format(&[snippet("x\n/*<<<T;WS-SQUASH\nbody\nT*/")]).unwrap(),
		@"FORMAT_ERROR:snippet: begin marker line not found"
	);
}

#[test]
fn typed_parse() {
	let block = parse_snippet("x\n\t/*!<<<Tag_2;TRIM\n a\n\tTag_2*/ trailing").unwrap();
	assert_eq!(block.tag, "Tag_2");
	assert_eq!(block.mode, WhitespaceMode::Trim);
	assert_eq!(block.body, " a");
	assert_eq!(
		parse_snippet("x\n/*<<<T;KEEP\nbody"),
		Err(SnippetError::NoEndMarker("T".to_owned()))
	);
}

#[test]
fn only_the_first_block_is_used() {
	let source = "x\n/*<<<A;TRIM\n%s\nA*/\n/*<<<B;TRIM\n%s\nB*/";
	assert_eq!(format(&[snippet(source), "a".into(), "b".into()]).unwrap(), "a");
}

#[test]
fn unknown_mode_lines_are_skipped() {
	let source = indoc! {"
		render(function () {
		    /*<<<OLD;SQUASH
		    OLD*/
		    /*<<<NEW;WS-TRIM
		        %s
		    NEW*/
		});
	"};
	assert_eq!(format(&[snippet(source), "ok".into()]).unwrap(), "ok");
}
