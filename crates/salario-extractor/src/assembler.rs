//! Record assembly: one salary record per post

use crate::candidate::CandidateExtractor;
use crate::classifier::Classifier;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::summary::RunSummary;
use salario_domain::{AnnotatedPost, RawPost, SalaryRecord, Tagger};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Runs candidate extraction and classification for each post
///
/// Posts are independent; the assembler keeps no state between them. Counters
/// and results accumulate in the [`RunContext`] passed in by the caller.
pub struct RecordAssembler<T: Tagger> {
    candidates: CandidateExtractor,
    classifier: Classifier<T>,
}

impl<T> RecordAssembler<T>
where
    T: Tagger,
    T::Error: std::fmt::Display,
{
    /// Create a new RecordAssembler around an injected tagger
    pub fn new(tagger: T, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            candidates: CandidateExtractor::new(&config)?,
            classifier: Classifier::new(tagger, &config),
        })
    }

    /// The classification engine
    pub fn classifier(&self) -> &Classifier<T> {
        &self.classifier
    }

    /// Derive the salary record for a single post
    pub fn assemble(&self, post: &RawPost) -> SalaryRecord {
        let snippet = self.candidates.extract(&post.text);
        if snippet.is_empty() {
            return SalaryRecord::empty();
        }

        let triple = self.classifier.classify_text(&snippet);
        debug!(
            "Post #{}: '{}' -> {:?} {:?} {:?}",
            post.post_number, snippet, triple.salary_type, triple.currency, triple.amount
        );
        SalaryRecord::from_snippet(snippet, triple)
    }

    /// Derive the record for `post` and add both to the run
    pub fn annotate(&self, post: RawPost, context: &mut RunContext) {
        let record = self.assemble(&post);
        context.push(AnnotatedPost::new(post, record));
    }

    /// Annotate a whole batch of posts in order
    pub fn annotate_all(&self, posts: impl IntoIterator<Item = RawPost>) -> RunContext {
        let posts: Vec<RawPost> = posts.into_iter().collect();
        info!("Analyzing {} posts", posts.len());

        let mut context = RunContext::with_capacity(posts.len());
        for post in posts {
            self.annotate(post, &mut context);
        }

        info!(
            "Detected {} posts with salaries ({}% of the total)",
            context.salary_posts(),
            context.percent_with_salary()
        );
        context
    }
}

/// Per-run accumulator of annotated posts and counters
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    records: Vec<AnnotatedPost>,
    salary_posts: usize,
}

impl RunContext {
    /// Create an empty run
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty run with room for `capacity` posts
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            salary_posts: 0,
        }
    }

    /// Add an annotated post
    pub fn push(&mut self, annotated: AnnotatedPost) {
        if annotated.record.has_mention() {
            self.salary_posts += 1;
        }
        self.records.push(annotated);
    }

    /// Number of posts seen
    pub fn total_posts(&self) -> usize {
        self.records.len()
    }

    /// Number of posts with a selected snippet
    pub fn salary_posts(&self) -> usize {
        self.salary_posts
    }

    /// Share of posts with a salary mention, rounded to one decimal
    pub fn percent_with_salary(&self) -> f64 {
        percent(self.salary_posts, self.total_posts())
    }

    /// Annotated posts in the order they were added
    pub fn records(&self) -> &[AnnotatedPost] {
        &self.records
    }

    /// Take the annotated posts
    pub fn into_records(self) -> Vec<AnnotatedPost> {
        self.records
    }

    /// Progress summary stamped with the current time
    pub fn summary(&self) -> RunSummary {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .ok();
        RunSummary {
            total_posts: self.total_posts(),
            salaries_posts: self.salary_posts,
            last_timestamp: now,
        }
    }
}

/// `part` as a percentage of `total`, rounded to one decimal
pub(crate) fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / total as f64).round() / 10.0
}
