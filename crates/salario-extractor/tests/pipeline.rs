//! End-to-end classification through the public API, driven by fixed tag
//! sequences.

use proptest::prelude::*;
use salario_domain::{Currency, PartOfSpeech, RawPost, SalaryType, Token};
use salario_extractor::{
    load_records, save_records, scan_tokens, Classifier, ExtractorConfig, RecordAssembler,
};
use salario_tagger::{tokens_from_pairs, MockTagger};

use PartOfSpeech::*;

fn post(number: u64, text: &str) -> RawPost {
    RawPost {
        post_number: number,
        username: "forista".to_string(),
        timestamp_unix: 1_650_000_000,
        text: text.to_string(),
    }
}

fn classifier(tagger: MockTagger) -> Classifier<MockTagger> {
    Classifier::new(tagger, &ExtractorConfig::default())
}

#[test]
fn net_with_symbol_and_code() {
    let tagger = MockTagger::new(vec![
        Token::plain("NETO", Propn),
        Token::new("$", "$", Sym),
        Token::plain("80000", Num),
        Token::plain("ARS", Propn),
    ]);
    let triple = classifier(tagger).classify_text("NETO $ 80000 ARS");
    assert_eq!(triple.salary_type, Some(SalaryType::Net));
    assert_eq!(triple.currency, Some(Currency::Ars));
    assert_eq!(triple.amount, Some(80_000.0));
}

#[test]
fn gross_with_thousand_multiplier() {
    let tagger = MockTagger::from_pairs(&[
        ("BRUTO", Propn),
        ("150", Num),
        ("MIL", Noun),
        ("PESOS", Noun),
    ]);
    let triple = classifier(tagger).classify_text("BRUTO 150 MIL PESOS");
    assert_eq!(triple.salary_type, Some(SalaryType::Gross));
    assert_eq!(triple.currency, Some(Currency::Ars));
    assert_eq!(triple.amount, Some(150_000.0));
}

#[test]
fn locale_separators_in_amount() {
    let tagger = MockTagger::from_pairs(&[("BRUTO", Propn), ("1.234,56", Num)]);
    let triple = classifier(tagger).classify_text("BRUTO 1.234,56");
    assert_eq!(triple.amount, Some(1234.56));
    assert_eq!(triple.currency, Some(Currency::Ars));
}

#[test]
fn discarded_tags_do_not_shift_positions() {
    // "NETO DE $ 80000": the adposition takes no position, so "$" is second
    let tagger = MockTagger::from_pairs(&[
        ("NETO", Propn),
        ("DE", Adp),
        ("$", Sym),
        ("80000", Num),
    ]);
    let triple = classifier(tagger).classify_text("NETO DE $ 80000");
    assert_eq!(triple.currency, Some(Currency::Ars));
    assert_eq!(triple.amount, Some(80_000.0));
}

#[test]
fn scanning_stops_at_the_position_limit() {
    let tokens = tokens_from_pairs(&[
        ("BRUTO", Propn),
        ("APROX", Adv),
        ("EN", Propn),
        ("TOTAL", Noun),
        ("1000", Num),
        ("DOLARES", Noun),
    ]);
    let triple = scan_tokens(&tokens, 6);
    assert_eq!(triple.salary_type, Some(SalaryType::Gross));
    assert_eq!(triple.amount, Some(1000.0));
    assert_eq!(triple.currency, None);
}

#[test]
fn multiplier_before_amount_is_ignored() {
    let tokens = tokens_from_pairs(&[
        ("BRUTO", Propn),
        ("PESOS", Noun),
        ("MIL", Noun),
        ("200", Num),
    ]);
    let triple = scan_tokens(&tokens, 6);
    assert_eq!(triple.amount, Some(200.0));
}

#[test]
fn tagger_failure_keeps_snippet_and_nulls_the_triple() {
    let mut tagger = MockTagger::default();
    tagger.add_error("BRUTO 100");
    let assembler = RecordAssembler::new(tagger, ExtractorConfig::default()).unwrap();

    let record = assembler.assemble(&post(1, "Salario mensual bruto 100"));
    assert_eq!(record.selected_text.as_deref(), Some("BRUTO 100"));
    assert!(record.triple().is_empty());
}

#[test]
fn posts_without_a_mention_never_reach_the_tagger() {
    let tagger = MockTagger::from_pairs(&[("BRUTO", Propn)]);
    let assembler = RecordAssembler::new(tagger, ExtractorConfig::default()).unwrap();

    let context = assembler.annotate_all(vec![post(1, "Hola a todos"), post(2, "")]);
    assert_eq!(context.total_posts(), 2);
    assert_eq!(context.salary_posts(), 0);
    assert_eq!(assembler.classifier().tagger().call_count(), 0);
    assert!(context.records().iter().all(|r| !r.record.has_mention()));
}

#[test]
fn results_document_has_expected_fields() {
    let tagger = MockTagger::from_pairs(&[("NETO", Propn), ("500000", Num)]);
    let assembler = RecordAssembler::new(tagger, ExtractorConfig::default()).unwrap();
    let context = assembler.annotate_all(vec![
        post(1, "Rol: QA|Salario mensual neto 500000|Seniority: Ssr"),
        post(2, "Sin datos"),
    ]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resultados.json");
    save_records(&path, context.records()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let first = &raw[0];
    for field in [
        "post_number",
        "username",
        "timestamp",
        "post",
        "selected_text",
        "type",
        "currency",
        "amount",
    ] {
        assert!(first.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(first["type"], "NET");
    assert_eq!(first["currency"], "ARS");
    assert_eq!(first["amount"], 500_000.0);
    assert!(raw[1]["selected_text"].is_null());
    assert!(raw[1]["type"].is_null());

    assert_eq!(load_records(&path).unwrap(), context.into_records());
}

fn any_tag() -> impl Strategy<Value = PartOfSpeech> {
    proptest::sample::select(PartOfSpeech::ALL.to_vec())
}

fn token_with(tag: impl Strategy<Value = PartOfSpeech>) -> impl Strategy<Value = Token> {
    (
        prop_oneof![
            "[0-9]{1,7}([.,][0-9]{1,3})?",
            "[A-Z$€]{1,8}",
            Just("MIL".to_string()),
            Just("K".to_string()),
            Just("BRUTO".to_string()),
            Just("U$D".to_string()),
        ],
        tag,
    )
        .prop_map(|(text, pos)| Token::plain(text, pos))
}

fn any_token() -> impl Strategy<Value = Token> {
    token_with(any_tag())
}

fn meaningful_token() -> impl Strategy<Value = Token> {
    token_with(any_tag().prop_filter("discarded", |t| !t.is_discarded()))
}

proptest! {
    #[test]
    fn engine_is_total(tokens in prop::collection::vec(any_token(), 0..12)) {
        let triple = scan_tokens(&tokens, 6).finalize();
        if let Some(amount) = triple.amount {
            prop_assert!(amount >= 0.0);
        }
    }

    #[test]
    fn only_the_first_five_meaningful_tokens_matter(
        head in prop::collection::vec(meaningful_token(), 5..=5),
        tail in prop::collection::vec(any_token(), 0..4),
    ) {
        let mut extended = head.clone();
        extended.extend(tail);
        prop_assert_eq!(scan_tokens(&head, 6), scan_tokens(&extended, 6));
    }
}
