//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{ExchangeRates, ExtractorConfig, RecordAssembler, SalaryStats};
    use salario_domain::{Currency, PartOfSpeech, RawPost, SalaryRecord, SalaryType, Token};
    use salario_tagger::{LexiconTagger, MockTagger};

    fn post(number: u64, text: &str) -> RawPost {
        RawPost {
            post_number: number,
            username: format!("user{}", number),
            timestamp_unix: 1_644_506_400,
            text: text.to_string(),
        }
    }

    fn lexicon_assembler() -> RecordAssembler<LexiconTagger> {
        RecordAssembler::new(LexiconTagger::new(), ExtractorConfig::default()).unwrap()
    }

    fn triple_of(text: &str) -> (Option<SalaryType>, Option<Currency>, Option<f64>) {
        let record = lexicon_assembler().assemble(&post(1, text));
        (record.salary_type, record.currency, record.amount)
    }

    #[test]
    fn test_full_flow_with_mock_tagger() {
        let mut tagger = MockTagger::default();
        tagger.add_tokens(
            "NETO $ 80000 ARS",
            vec![
                Token::plain("NETO", PartOfSpeech::Propn),
                Token::new("$", "$", PartOfSpeech::Sym),
                Token::plain("80000", PartOfSpeech::Num),
                Token::plain("ARS", PartOfSpeech::Propn),
            ],
        );
        let assembler = RecordAssembler::new(tagger, ExtractorConfig::default()).unwrap();

        let record = assembler.assemble(&post(4, "Edad: 30|Salario mensual neto $ 80000 ars|Rol: SRE"));
        assert_eq!(record.selected_text.as_deref(), Some("NETO $ 80000 ARS"));
        assert_eq!(record.salary_type, Some(SalaryType::Net));
        assert_eq!(record.currency, Some(Currency::Ars));
        assert_eq!(record.amount, Some(80_000.0));
    }

    #[test]
    fn test_gross_thousands_in_pesos() {
        assert_eq!(
            triple_of("Salario mensual bruto: 150 mil pesos"),
            (Some(SalaryType::Gross), Some(Currency::Ars), Some(150_000.0))
        );
    }

    #[test]
    fn test_dotted_amount_defaults_to_local_currency() {
        assert_eq!(
            triple_of("Salario mensual neto: 350.000|Rubro: banca"),
            (Some(SalaryType::Net), Some(Currency::Ars), Some(350_000.0))
        );
    }

    #[test]
    fn test_net_in_hand() {
        assert_eq!(
            triple_of("salario mensual en mano 420.000"),
            (Some(SalaryType::Net), Some(Currency::Ars), Some(420_000.0))
        );
    }

    #[test]
    fn test_dollars_without_type_default_to_gross() {
        assert_eq!(
            triple_of("Salario mensual u$d 2000"),
            (Some(SalaryType::Gross), Some(Currency::Usd), Some(2000.0))
        );
    }

    #[test]
    fn test_leading_number_is_not_an_amount() {
        // The first position only ever names a type or a currency
        assert_eq!(
            triple_of("Salario mensual 2000 dolares"),
            (None, Some(Currency::Usd), None)
        );
    }

    #[test]
    fn test_euro_symbol_with_decimal_comma() {
        assert_eq!(
            triple_of("Salario mensual bruto: € 3.500,50"),
            (Some(SalaryType::Gross), Some(Currency::Eur), Some(3500.5))
        );
    }

    #[test]
    fn test_k_suffix_token() {
        assert_eq!(
            triple_of("Salario mensual bruto 250 K"),
            (Some(SalaryType::Gross), Some(Currency::Ars), Some(250_000.0))
        );
    }

    #[test]
    fn test_glued_multiplier_suffix() {
        assert_eq!(
            triple_of("Salario mensual bruto 150K pesos"),
            (Some(SalaryType::Gross), Some(Currency::Ars), Some(150_000.0))
        );
        assert_eq!(
            triple_of("Salario mensual bruto 2MIL usd"),
            (Some(SalaryType::Gross), Some(Currency::Usd), Some(2000.0))
        );
        assert_eq!(
            triple_of("Salario mensual neto 1,5MILLONES"),
            (Some(SalaryType::Net), Some(Currency::Ars), Some(1_500_000.0))
        );
    }

    #[test]
    fn test_vocabulary_free_snippet() {
        let record = lexicon_assembler().assemble(&post(1, "Salario mensual: lo suficiente"));
        assert_eq!(record, SalaryRecord::empty());

        let record = lexicon_assembler().assemble(&post(1, "Salario mensual a convenir"));
        assert_eq!(record.selected_text.as_deref(), Some("A CONVENIR"));
        assert!(record.triple().is_empty());
    }

    #[test]
    fn test_empty_post() {
        let record = lexicon_assembler().assemble(&post(1, ""));
        assert_eq!(record, SalaryRecord::empty());
    }

    #[test]
    fn test_batch_then_stats() {
        let context = lexicon_assembler().annotate_all(vec![
            post(1, "Salario mensual bruto: 300.000 pesos"),
            post(2, "Salario mensual bruto: 1000 usd"),
            post(3, "Salario mensual neto: 200 mil"),
            post(4, "Buen thread, gracias"),
        ]);
        assert_eq!(context.salary_posts(), 3);
        assert_eq!(context.percent_with_salary(), 75.0);

        let stats = SalaryStats::compute(
            context.records(),
            SalaryType::Gross,
            &ExchangeRates::new(300.0, 320.0),
        );
        assert_eq!(stats.sample_size, 2);
        assert_eq!(stats.mean_local, Some(300_000.0));
        assert_eq!(stats.mean_usd, Some(1000.0));
    }
}
