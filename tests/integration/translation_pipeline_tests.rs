/*!
 * End-to-end tests of the translation pipeline on the mock provider
 */

use anyhow::Result;
use parking_lot::Mutex;
use bilingua::errors::{ProviderError, TranslationError};
use bilingua::providers::ChunkRequest;
use bilingua::providers::mock::MockProvider;
use bilingua::translation::ChunkStatus;
use crate::common;

const CRLF: &str = "\r\n";

// Source line followed by the mock's French rendition
fn pair(line: &str) -> String {
    format!("{}{}[fr] {}{}", line, CRLF, line, CRLF)
}

#[tokio::test]
async fn test_translate_withJapaneseText_shouldInterleaveEverySentence() -> Result<()> {
    common::init_logger();
    let mock = MockProvider::working();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let result = service.translate(common::JAPANESE_TEXT, "Japanese", "English", None).await?;

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].text, "今日は晴れです。\r\n明日は雨です。\r\n週末は雪です。");
    assert_eq!(requests[0].source_language, "ja");
    assert_eq!(requests[0].target_language, "en");

    assert_eq!(
        result.document,
        "今日は晴れです。\r\n[en] 今日は晴れです。\r\n\
         明日は雨です。\r\n[en] 明日は雨です。\r\n\
         週末は雪です。\r\n[en] 週末は雪です。\r\n\r\n"
    );
    assert!(result.is_complete());
    Ok(())
}

#[tokio::test]
async fn test_translate_withLongText_shouldSendSentenceAlignedChunksInOrder() -> Result<()> {
    let mock = MockProvider::working();
    let mut config = common::mock_translation_config();
    config.max_chunk_len = 100;
    let service = common::service_with_mock(config, &mock);

    let text = common::latin_sentences(5, 40);
    let sentences: Vec<String> = text.split_inclusive('.').map(str::to_string).collect();

    let result = service.translate(&text, "English", "French", None).await?;

    let sent: Vec<String> = mock.requests().into_iter().map(|r| r.text).collect();
    assert_eq!(
        sent,
        vec![
            format!("{}{}{}", sentences[0], CRLF, sentences[1]),
            format!("{}{}{}", sentences[2], CRLF, sentences[3]),
            sentences[4].clone(),
        ]
    );
    assert!(sent.iter().all(|chunk| chunk.chars().count() <= 100));

    let expected = format!(
        "{}{}{}{}{}{}{}{}",
        pair(&sentences[0]),
        pair(&sentences[1]),
        CRLF,
        pair(&sentences[2]),
        pair(&sentences[3]),
        CRLF,
        pair(&sentences[4]),
        CRLF
    );
    assert_eq!(result.document, expected);
    assert_eq!(result.chunks.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_translate_withFailingChunk_shouldKeepGoingAndRecordError() -> Result<()> {
    let mock = MockProvider::fail_on(1);
    let mut config = common::mock_translation_config();
    config.max_chunk_len = 100;
    let service = common::service_with_mock(config, &mock);

    let text = common::latin_sentences(5, 40);
    let sentences: Vec<String> = text.split_inclusive('.').map(str::to_string).collect();

    let result = service.translate(&text, "English", "French", None).await?;

    assert_eq!(mock.request_count(), 3);
    let expected = format!(
        "{}{}{}{}{}{}",
        pair(&sentences[0]),
        pair(&sentences[1]),
        CRLF,
        CRLF,
        pair(&sentences[4]),
        CRLF
    );
    assert_eq!(result.document, expected);

    assert!(!result.is_complete());
    assert!(matches!(result.last_error(), Some(ProviderError::ConnectionError(_))));
    let failed: Vec<usize> = result.failed_chunks().iter().map(|c| c.index).collect();
    assert_eq!(failed, vec![1]);
    assert!(result.chunks[2].is_translated());
    Ok(())
}

#[tokio::test]
async fn test_translate_withEveryChunkFailing_shouldReturnOnlySeparators() -> Result<()> {
    let mock = MockProvider::failing();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let result = service.translate(common::TWO_SENTENCES, "English", "French", None).await?;

    assert_eq!(result.document, CRLF);
    assert_eq!(result.failed_chunks().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_translate_withUnknownLanguage_shouldSendEmptyIdentifier() -> Result<()> {
    common::init_logger();
    let mock = MockProvider::working();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let result = service.translate(common::TWO_SENTENCES, "Klingon", "French", None).await?;

    assert_eq!(
        mock.requests(),
        vec![ChunkRequest::new("Hello world.\r\n This is a test.", "", "fr")]
    );
    assert!(result.is_complete());
    Ok(())
}

#[tokio::test]
async fn test_translate_withGlossary_shouldSubstituteBeforeSegmentation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let glossary = common::create_test_file(temp_dir.path(), "glossary.txt", "Mr.:Mister,\r\nMrs.:Missus")?;
    let text = "Mr. Smith arrived. He sat down.";

    let plain_mock = MockProvider::working();
    let plain = common::service_with_mock(common::mock_translation_config(), &plain_mock);
    plain.translate(text, "English", "French", None).await?;
    assert_eq!(plain_mock.requests()[0].text, "Mr.\r\n Smith arrived.\r\n He sat down.");

    let mock = MockProvider::working();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);
    let result = service.translate(text, "English", "French", Some(&glossary)).await?;

    assert_eq!(mock.requests()[0].text, "Mister Smith arrived.\r\n He sat down.");
    assert!(result.document.starts_with("Mister Smith arrived.\r\n[fr] Mister Smith arrived.\r\n"));
    Ok(())
}

#[tokio::test]
async fn test_translate_withMissingGlossary_shouldTranslateUnchanged() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mock = MockProvider::working();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let missing = temp_dir.path().join("missing.txt");
    service.translate(common::TWO_SENTENCES, "English", "French", Some(&missing)).await?;

    assert_eq!(mock.requests()[0].text, "Hello world.\r\n This is a test.");
    Ok(())
}

#[tokio::test]
async fn test_translate_withUnreadableGlossary_shouldAbortBeforeAnyRequest() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let glossary = temp_dir.path().join("glossary.txt");
    std::fs::write(&glossary, [0xff, 0xfe, 0x00, 0x41])?;

    let mock = MockProvider::working();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);
    let result = service.translate(common::TWO_SENTENCES, "English", "French", Some(&glossary)).await;

    assert!(matches!(result, Err(TranslationError::Glossary { .. })));
    assert_eq!(mock.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_translate_withoutChunkSeparation_shouldOmitBlankLine() -> Result<()> {
    let mock = MockProvider::working();
    let mut config = common::mock_translation_config();
    config.separate_chunks = false;
    let service = common::service_with_mock(config, &mock);

    let result = service.translate(common::TWO_SENTENCES, "English", "French", None).await?;

    assert_eq!(result.document, format!("{}{}", pair("Hello world."), pair(" This is a test.")));
    Ok(())
}

#[tokio::test]
async fn test_translate_withFewerTranslatedLines_shouldEmitRemainingSourceLines() -> Result<()> {
    let mock = MockProvider::working().with_custom_response(|_| vec!["Bonjour le monde.".to_string()]);
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let result = service.translate(common::TWO_SENTENCES, "English", "French", None).await?;

    assert_eq!(
        result.document,
        "Hello world.\r\nBonjour le monde.\r\n This is a test.\r\n\r\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_translate_withMoreTranslatedLines_shouldAppendExtraLines() -> Result<()> {
    let mock = MockProvider::working()
        .with_custom_response(|_| vec!["Un.".to_string(), "Deux.".to_string(), "Trois.".to_string()]);
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let result = service.translate(common::TWO_SENTENCES, "English", "French", None).await?;

    assert_eq!(
        result.document,
        "Hello world.\r\nUn.\r\n This is a test.\r\nDeux.\r\nTrois.\r\n\r\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_translate_withEmptyResponse_shouldKeepSourceLines() -> Result<()> {
    let mock = MockProvider::empty();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let result = service.translate(common::TWO_SENTENCES, "English", "French", None).await?;

    assert_eq!(result.document, "Hello world.\r\n This is a test.\r\n\r\n");
    assert!(matches!(&result.chunks[0].status, ChunkStatus::Translated { lines } if lines.is_empty()));
    Ok(())
}

#[tokio::test]
async fn test_translate_withEmptyInput_shouldIssueNoRequest() -> Result<()> {
    let mock = MockProvider::working();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let result = service.translate("", "English", "French", None).await?;

    assert_eq!(result.document, "");
    assert!(result.chunks.is_empty());
    assert!(result.is_complete());
    assert_eq!(mock.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_translate_withBlankInput_shouldSkipProviderCall() -> Result<()> {
    let mock = MockProvider::working();
    let service = common::service_with_mock(common::mock_translation_config(), &mock);

    let result = service.translate("   ", "English", "French", None).await?;

    assert_eq!(mock.request_count(), 0);
    assert_eq!(result.document, "   \r\n\r\n");
    Ok(())
}

#[tokio::test]
async fn test_translateWithProgress_shouldReportEveryChunk() -> Result<()> {
    let mock = MockProvider::working();
    let mut config = common::mock_translation_config();
    config.max_chunk_len = 100;
    let service = common::service_with_mock(config, &mock);
    let progress = Mutex::new(Vec::new());

    service
        .translate_with_progress(&common::latin_sentences(5, 40), "English", "French", None, |done, total| {
            progress.lock().push((done, total));
        })
        .await?;

    assert_eq!(progress.into_inner(), vec![(1, 3), (2, 3), (3, 3)]);
    Ok(())
}

#[tokio::test]
async fn test_translate_withSlowProvider_shouldAwaitEachChunkInOrder() -> Result<()> {
    let mock = MockProvider::slow(30);
    let mut config = common::mock_translation_config();
    config.max_chunk_len = 100;
    let service = common::service_with_mock(config, &mock);

    let text = common::latin_sentences(5, 40);
    let sentences: Vec<String> = text.split_inclusive('.').map(str::to_string).collect();

    let result = service.translate(&text, "English", "French", None).await?;

    // Sequential awaits: three answers of 30ms each
    assert!(result.elapsed >= std::time::Duration::from_millis(90));
    assert!(result.is_complete());
    let indices: Vec<usize> = result.chunks.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(mock.requests()[2].text, sentences[4]);
    assert_eq!(
        result.document,
        format!(
            "{}{}{}{}{}{}{}{}",
            pair(&sentences[0]),
            pair(&sentences[1]),
            CRLF,
            pair(&sentences[2]),
            pair(&sentences[3]),
            CRLF,
            pair(&sentences[4]),
            CRLF
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_translate_withRequestDelay_shouldPauseBetweenChunks() -> Result<()> {
    let mock = MockProvider::working();
    let mut config = common::mock_translation_config();
    config.max_chunk_len = 100;
    config.request_delay_ms = 20;
    let service = common::service_with_mock(config, &mock);

    let result = service.translate(&common::latin_sentences(5, 40), "English", "French", None).await?;

    // Two pauses for three chunks
    assert!(result.elapsed >= std::time::Duration::from_millis(40));
    Ok(())
}

#[tokio::test]
async fn test_translate_withBoundaryOverride_shouldSegmentOnCustomMarker() -> Result<()> {
    let mock = MockProvider::working();
    let mut config = common::mock_translation_config();
    config.boundary_marker = Some('!');
    let service = common::service_with_mock(config, &mock);

    service.translate("Stop! Go. Now!", "English", "French", None).await?;

    assert_eq!(mock.requests()[0].text, "Stop!\r\n Go. Now!");
    Ok(())
}
