//! Daily CSV absence log.
//!
//! One file per calendar date, `absent_children_<YYYY_MM_DD>.csv`, in the
//! configured directory. The first append of a day creates the file and
//! writes the header; later appends only add a row. Repeated reports of
//! the same child produce repeated rows.
//!
//! Appends hold an async mutex from the existence check to the final
//! write, so concurrent sessions can neither interleave rows nor both
//! decide to write the header.

use absence_application::ports::absence_log::{AbsenceLog, AppendReceipt, PersistenceError};
use absence_domain::{AbsenceLogEntry, LOG_HEADER};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// File name prefix of every daily absence file
pub const FILE_PREFIX: &str = "absent_children_";
/// File name suffix of every daily absence file
pub const FILE_SUFFIX: &str = ".csv";

type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Absence log writing one CSV file per day
pub struct CsvAbsenceLog {
    directory: PathBuf,
    clock: Clock,
    write_lock: Mutex<()>,
}

impl CsvAbsenceLog {
    /// Log into `directory`, dating files by the local calendar.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            clock: Arc::new(|| chrono::Local::now().date_naive()),
            write_lock: Mutex::new(()),
        }
    }

    /// Replace the source of "today" (tests, or a fixed time zone)
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File name for a given date
    pub fn file_name_for(date: NaiveDate) -> String {
        format!("{}{}{}", FILE_PREFIX, date.format("%Y_%m_%d"), FILE_SUFFIX)
    }

    /// Full path of the file for a given date
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.directory.join(Self::file_name_for(date))
    }

    /// Full path of today's file
    pub fn today_path(&self) -> PathBuf {
        self.path_for((self.clock)())
    }

    /// Append a row to the file of `date`.
    pub async fn append_on(
        &self,
        entry: &AbsenceLogEntry,
        date: NaiveDate,
    ) -> Result<AppendReceipt, PersistenceError> {
        let path = self.path_for(date);
        let _guard = self.write_lock.lock().await;

        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|source| PersistenceError::Io {
                path: self.directory.clone(),
                source,
            })?;

        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|source| PersistenceError::Io {
                path: path.clone(),
                source,
            })?;
        let bytes = encode(entry, !exists)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|source| PersistenceError::Io {
                path: path.clone(),
                source,
            })?;
        file.write_all(&bytes)
            .await
            .map_err(|source| PersistenceError::Io {
                path: path.clone(),
                source,
            })?;
        file.flush().await.map_err(|source| PersistenceError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(AppendReceipt {
            path,
            header_written: !exists,
        })
    }
}

#[async_trait]
impl AbsenceLog for CsvAbsenceLog {
    async fn append(&self, entry: &AbsenceLogEntry) -> Result<AppendReceipt, PersistenceError> {
        let today = (self.clock)();
        self.append_on(entry, today).await
    }
}

/// Encode the row (and the header, for a new file) in one buffer so the
/// file sees a single write.
fn encode(entry: &AbsenceLogEntry, with_header: bool) -> Result<Vec<u8>, PersistenceError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if with_header {
        writer
            .write_record(LOG_HEADER)
            .map_err(|e| PersistenceError::Encode(e.to_string()))?;
    }
    writer
        .write_record(entry.as_row())
        .map_err(|e| PersistenceError::Encode(e.to_string()))?;

    writer
        .into_inner()
        .map_err(|e| PersistenceError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use absence_application::{InboundMessage, ReportAbsenceUseCase};
    use absence_domain::{Child, Reply, ReplyTemplate, Roster};

    fn entry(group: &str, last: &str, first: &str, birth: &str) -> AbsenceLogEntry {
        AbsenceLogEntry::from(Child::new(group, last, first, birth))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_file_name_format() {
        assert_eq!(
            CsvAbsenceLog::file_name_for(date(2026, 3, 7)),
            "absent_children_2026_03_07.csv"
        );
    }

    #[tokio::test]
    async fn test_first_append_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let log = CsvAbsenceLog::new(dir.path()).with_clock(|| date(2026, 10, 19));

        let receipt = log.append(&entry("1", "Lee", "Min", "01.02.19")).await.unwrap();
        assert!(receipt.header_written);
        assert_eq!(
            receipt.path,
            dir.path().join("absent_children_2026_10_19.csv")
        );

        let content = std::fs::read_to_string(&receipt.path).unwrap();
        assert_eq!(
            content,
            "Group,Last name,First name,Birth date\n1,Lee,Min,01.02.19\n"
        );
    }

    #[tokio::test]
    async fn test_header_written_once_for_many_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log = CsvAbsenceLog::new(dir.path()).with_clock(|| date(2026, 10, 19));

        for _ in 0..5 {
            log.append(&entry("1", "Lee", "Min", "01.02.19")).await.unwrap();
        }

        let content = std::fs::read_to_string(log.today_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Group,Last name,First name,Birth date");
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("Group,")).count(),
            1
        );
        // Duplicates are kept
        assert!(lines[1..].iter().all(|l| *l == "1,Lee,Min,01.02.19"));
    }

    #[tokio::test]
    async fn test_each_date_gets_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = CsvAbsenceLog::new(dir.path());

        let first = log
            .append_on(&entry("1", "Lee", "Min", "01.02.19"), date(2026, 10, 19))
            .await
            .unwrap();
        let second = log
            .append_on(&entry("2", "Park", "Ji", "03.04.20"), date(2026, 10, 20))
            .await
            .unwrap();

        assert_ne!(first.path, second.path);
        assert!(first.header_written);
        assert!(second.header_written);
        let content = std::fs::read_to_string(&second.path).unwrap();
        assert_eq!(
            content,
            "Group,Last name,First name,Birth date\n2,Park,Ji,03.04.20\n"
        );
    }

    #[tokio::test]
    async fn test_concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(CsvAbsenceLog::new(dir.path()).with_clock(|| date(2026, 10, 19)));

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..20 {
            let log = Arc::clone(&log);
            tasks.spawn(async move {
                let row = entry(&(i % 2 + 1).to_string(), &format!("Last{i}"), "First", "01.01.20");
                log.append(&row).await
            });
        }

        let mut headers_written = 0;
        while let Some(result) = tasks.join_next().await {
            if result.unwrap().unwrap().header_written {
                headers_written += 1;
            }
        }
        assert_eq!(headers_written, 1);

        let content = std::fs::read_to_string(log.today_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "Group,Last name,First name,Birth date");
        for i in 0..20 {
            let expected = format!("{},Last{i},First,01.01.20", i % 2 + 1);
            assert!(lines.contains(&expected.as_str()), "missing {expected}");
        }
    }

    #[tokio::test]
    async fn test_values_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let log = CsvAbsenceLog::new(dir.path()).with_clock(|| date(2026, 10, 19));

        log.append(&entry("1", "Lee, Jr.", "Min", "01.02.19"))
            .await
            .unwrap();

        let content = std::fs::read_to_string(log.today_path()).unwrap();
        assert!(content.ends_with("1,\"Lee, Jr.\",Min,01.02.19\n"));
    }

    #[tokio::test]
    async fn test_missing_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("absences").join("2026");
        let log = CsvAbsenceLog::new(&nested).with_clock(|| date(2026, 10, 19));

        log.append(&entry("1", "Lee", "Min", "01.02.19")).await.unwrap();
        assert!(nested.join("absent_children_2026_10_19.csv").exists());
    }

    // ==================== Through the use case ====================

    async fn report(
        use_case: &ReportAbsenceUseCase<CsvAbsenceLog>,
        session: &str,
        messages: &[&str],
    ) -> Reply {
        let mut last = None;
        for text in messages {
            last = Some(
                use_case
                    .handle(InboundMessage::new(session, *text))
                    .await
                    .unwrap(),
            );
        }
        last.unwrap()
    }

    fn use_case_in(dir: &Path) -> (ReportAbsenceUseCase<CsvAbsenceLog>, Arc<CsvAbsenceLog>) {
        let roster = Arc::new(Roster::new(vec![
            Child::new("1", "Lee", "Min", "01.02.19"),
            Child::new("2", "Park", "Ji", "03.04.20"),
        ]));
        let log = Arc::new(CsvAbsenceLog::new(dir).with_clock(|| date(2026, 10, 19)));
        (ReportAbsenceUseCase::new(roster, Arc::clone(&log)), log)
    }

    #[tokio::test]
    async fn test_completed_conversation_writes_todays_file() {
        let dir = tempfile::tempdir().unwrap();
        let (use_case, log) = use_case_in(dir.path());

        let reply = report(
            &use_case,
            "anna",
            &["/start", "Group 1", "Lee", "Min", "01.02.19"],
        )
        .await;

        assert_eq!(reply, ReplyTemplate::recorded());
        let content = std::fs::read_to_string(log.today_path()).unwrap();
        assert_eq!(
            content,
            "Group,Last name,First name,Birth date\n1,Lee,Min,01.02.19\n"
        );
    }

    #[tokio::test]
    async fn test_wrong_birth_date_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (use_case, log) = use_case_in(dir.path());

        let reply = report(
            &use_case,
            "anna",
            &["/start", "Group 1", "Lee", "Min", "02.02.19"],
        )
        .await;

        assert_eq!(reply, ReplyTemplate::not_found());
        assert!(!log.today_path().exists());
    }

    #[tokio::test]
    async fn test_two_sessions_share_one_header() {
        let dir = tempfile::tempdir().unwrap();
        let (use_case, log) = use_case_in(dir.path());

        let (anna, ben) = tokio::join!(
            report(
                &use_case,
                "anna",
                &["/start", "Group 1", "Lee", "Min", "01.02.19"],
            ),
            report(
                &use_case,
                "ben",
                &["/start", "Group 2", "Park", "Ji", "03.04.20"],
            ),
        );
        assert_eq!(anna, ReplyTemplate::recorded());
        assert_eq!(ben, ReplyTemplate::recorded());

        let content = std::fs::read_to_string(log.today_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Group,Last name,First name,Birth date");
        assert!(lines.contains(&"1,Lee,Min,01.02.19"));
        assert!(lines.contains(&"2,Park,Ji,03.04.20"));
    }

    #[tokio::test]
    async fn test_unwritable_directory_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();
        let log = CsvAbsenceLog::new(&blocker);

        let err = log
            .append(&entry("1", "Lee", "Min", "01.02.19"))
            .await
            .unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }
}
