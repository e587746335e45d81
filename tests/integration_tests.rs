//! Integration tests for rapid_summarizer

use rapid_summarizer::*;

/// Sample text for testing
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future. The primary aim is to allow the computers to learn
automatically without human intervention or assistance.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised or unsupervised.
Bananas are yellow and taste sweet when ripe.
"#;

const AI_TEXT: &str = "AI is powerful. Machine learning powers AI. The weather today is sunny.";

#[test]
fn test_full_pipeline() {
    // Segment
    let sentences = segment(SAMPLE_TEXT, Language::English);
    assert_eq!(sentences.len(), 7);
    for (i, sentence) in sentences.iter().enumerate() {
        assert_eq!(sentence.index, i);
        assert_eq!(&SAMPLE_TEXT[sentence.start..sentence.end], sentence.text);
    }

    // Vectorize
    let (vocabulary, vectors) = vectorize(&sentences);
    assert_eq!(vectors.len(), sentences.len());
    assert!(vocabulary.terms().windows(2).all(|w| w[0] < w[1]));

    // Build graph
    let graph = build_similarity_graph(&vectors, 0.0);
    assert_eq!(graph.num_nodes, 7);
    assert!(graph.num_edges() > 0);

    // Rank
    let config = SummarizerConfig::default();
    let ranked = rank_sentences(&graph, &vectors, &config);
    assert_eq!(ranked.strategy, RankStrategy::TextRank);
    assert!(ranked.converged);

    // The unrelated last sentence is isolated and gets the base score only
    let base = (1.0 - config.damping) / 7.0;
    assert!((ranked.scores[6] - base).abs() < 1e-12);

    // Select
    let selected = select_summary(&sentences, &ranked.scores, 3);
    assert_eq!(selected.len(), 3);
    assert!(selected.windows(2).all(|w| w[0].index < w[1].index));
    assert!(selected.iter().all(|s| s.index != 6));

    // Keywords
    let keywords = extract_keywords(&vocabulary, &vectors, 5);
    assert_eq!(keywords.len(), 5);
    assert_eq!(keywords[0].weight, 1.0);
    assert!(keywords.iter().any(|k| k.term == "learning"));
}

#[test]
fn test_summarizer_matches_manual_pipeline() {
    let summary = Summarizer::new().summarize(SAMPLE_TEXT);

    let sentences = segment(SAMPLE_TEXT, Language::English);
    let (vocabulary, vectors) = vectorize(&sentences);
    let graph = build_similarity_graph(&vectors, 0.0);
    let ranked = rank_sentences(&graph, &vectors, &SummarizerConfig::default());
    let selected = select_summary(&sentences, &ranked.scores, 3);

    let expected: Vec<_> = selected.iter().map(|s| s.text.as_str()).collect();
    let actual: Vec<_> = summary.sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(actual, expected);
    assert_eq!(summary.keywords, extract_keywords(&vocabulary, &vectors, 10));
}

#[test]
fn test_ai_example() {
    let summary = summarize(AI_TEXT, "en", 2, 5).unwrap();

    assert_eq!(summary.text(), "AI is powerful. Machine learning powers AI.");
    assert_eq!(summary.sentences[0].index, 0);
    assert_eq!(summary.sentences[1].index, 1);
    assert_eq!(summary.keywords[0].term, "ai");
}

#[test]
fn test_keyword_example() {
    let text = "Network data. Network data. Network data. Network. Network model.";
    let summary = summarize(text, "en", 1, 3).unwrap();

    let keywords = summary.keyword_tuples();
    assert_eq!(keywords.len(), 3);
    assert_eq!(keywords[0], ("network".to_string(), 1.0));
    assert_eq!(keywords[1].0, "data");
    assert_eq!(keywords[2].0, "model");
    assert!(keywords[1].1 < 1.0);
    assert!(keywords[2].1 < keywords[1].1);
}

#[test]
fn test_degenerate_graph_fallback() {
    let text = "Cats purr. Dogs bark. Birds sing.";
    let summary = summarize(text, "en", 2, 10).unwrap();

    assert_eq!(summary.strategy, RankStrategy::Frequency);
    assert_eq!(summary.text(), "Cats purr. Dogs bark.");
    assert_eq!(summary, summarize(text, "en", 2, 10).unwrap());
}

#[test]
fn test_single_sentence_without_terminator() {
    let summary = summarize("just one line of text", "en", 3, 10).unwrap();

    assert_eq!(summary.total_sentences, 1);
    assert_eq!(summary.text(), "just one line of text");
    assert_eq!(summary.strategy, RankStrategy::Frequency);
}

#[test]
fn test_empty_input_is_not_an_error() {
    let summary = summarize("", "en", 3, 10).unwrap();
    assert!(summary.is_empty());
    assert!(summary.keywords.is_empty());

    assert!(matches!(
        summary.require_content(),
        Err(SummarizerError::EmptyInput { .. })
    ));
}

#[test]
fn test_invalid_utf8() {
    let err = Summarizer::new()
        .summarize_bytes(&[b'O', b'k', 0xC3, 0x28])
        .unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(
        err,
        SummarizerError::InvalidEncoding { valid_up_to: 2, .. }
    ));

    assert!(segment_bytes("Fine. Text.".as_bytes(), Language::English).is_ok());
}

#[test]
fn test_unsupported_language() {
    let err = summarize(AI_TEXT, "tlh", 2, 3).unwrap_err();
    assert!(matches!(err, SummarizerError::UnsupportedLanguage { .. }));
}

#[test]
fn test_abbreviations_do_not_split() {
    let text = "Dr. Smith met Mr. Jones at 5 p.m. yesterday. They talked.";
    let sentences = segment(text, Language::English);

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[1].text, "They talked.");
}

#[test]
fn test_polish_document() {
    let text = "Uczenie maszynowe jest ważne. Uczenie głębokie to rodzaj uczenia maszynowego. \
                Dzisiaj pada deszcz.";
    let summary = summarize(text, "pl", 2, 5).unwrap();

    assert_eq!(summary.total_sentences, 3);
    assert_eq!(summary.sentences.len(), 2);
    assert!(summary.keywords.iter().any(|k| k.term == "uczenie"));
    assert!(summary.keywords.iter().all(|k| k.term != "jest"));
}

#[test]
fn test_json_round_trip() {
    let input = serde_json::json!({
        "text": AI_TEXT,
        "config": { "num_sentences": 2, "num_keywords": 2, "keyword_method": "frequency" }
    })
    .to_string();

    let output = json::summarize_json(&input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"], "AI is powerful. Machine learning powers AI.");
    assert_eq!(value["keywords"][0]["term"], "ai");
    assert_eq!(value["strategy"], "text_rank");
}

#[test]
fn test_config_serde_defaults() {
    let config: SummarizerConfig =
        serde_json::from_str(r#"{"language": "de", "num_sentences": 1}"#).unwrap();

    assert_eq!(config.language, Language::German);
    assert_eq!(config.num_sentences, 1);
    assert_eq!(config.damping, 0.85);
    assert_eq!(config.keyword_method, KeywordMethod::TfIdf);
}

#[test]
fn test_parallel_path_matches_sequential() {
    let nouns = ["graph", "vector", "kernel", "matrix", "tensor", "signal", "filter"];
    let text: String = (0..80)
        .map(|i| {
            format!(
                "The {} feeds the {} through a {}. ",
                nouns[i % 7],
                nouns[(i * 3) % 5],
                nouns[(i + 2) % 3]
            )
        })
        .collect();

    let sequential = Summarizer::with_config(
        SummarizerConfig::default().with_parallel_threshold(usize::MAX),
    )
    .unwrap()
    .summarize(&text);
    let parallel = Summarizer::with_config(SummarizerConfig::default().with_parallel_threshold(2))
        .unwrap()
        .summarize(&text);

    assert_eq!(sequential, parallel);
}
