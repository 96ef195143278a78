use linarqa_core::SearchTerm;
use linarqa_models::{Student, StudentFilterParams, StudentStatus};
use tracing::{debug, instrument};

use crate::modules::students::model::StudentStatistics;
use crate::utils::filter::{filter_items, matches_criterion};

pub struct StudentService;

impl StudentService {
    /// Students whose Latin or Arabic name matches the search box and whose
    /// status matches exactly.
    #[instrument(skip_all, fields(students = students.len()))]
    pub fn filter_students<'a>(
        students: &'a [Student],
        params: &StudentFilterParams,
    ) -> Vec<&'a Student> {
        let search = SearchTerm::new(params.search.as_deref());
        let filtered = filter_items(students, &search, |student| {
            matches_criterion(params.status.as_ref(), &student.status)
        });

        debug!(matched = filtered.len(), "Filtered students");
        filtered
    }

    #[instrument(skip_all, fields(students = students.len()))]
    pub fn summarize_students(students: &[Student]) -> StudentStatistics {
        let mut stats = StudentStatistics {
            total_students: students.len(),
            ..Default::default()
        };
        for student in students {
            match student.status {
                StudentStatus::Active => stats.active_students += 1,
                StudentStatus::Inactive => stats.inactive_students += 1,
                StudentStatus::Left => stats.left_students += 1,
                StudentStatus::Other => {}
            }
        }

        debug!(active = stats.active_students, "Computed student statistics");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linarqa_models::StudentId;

    fn student(id: &str, first: &str, last: &str, arabic: Option<(&str, &str)>, status: StudentStatus) -> Student {
        Student {
            id: StudentId::from(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            first_name_arabic: arabic.map(|(f, _)| f.to_string()),
            last_name_arabic: arabic.map(|(_, l)| l.to_string()),
            birth_date: None,
            status,
        }
    }

    fn fixture() -> Vec<Student> {
        vec![
            student("s1", "Amine", "Benali", Some(("أمين", "بنعلي")), StudentStatus::Active),
            student("s2", "Salma", "Amrani", None, StudentStatus::Inactive),
            student("s3", "Youssef", "Chraibi", Some(("يوسف", "الشرايبي")), StudentStatus::Left),
        ]
    }

    #[test]
    fn test_search_full_name() {
        let students = fixture();
        let params = StudentFilterParams {
            search: Some("amine ben".to_string()),
            status: None,
        };
        let out = StudentService::filter_students(&students, &params);
        assert_eq!(out, vec![&students[0]]);
    }

    #[test]
    fn test_search_arabic_name() {
        let students = fixture();
        let params = StudentFilterParams {
            search: Some("يوسف".to_string()),
            status: None,
        };
        let out = StudentService::filter_students(&students, &params);
        assert_eq!(out, vec![&students[2]]);
    }

    #[test]
    fn test_search_substring_of_last_name() {
        let students = fixture();
        let params = StudentFilterParams {
            search: Some("AMR".to_string()),
            status: None,
        };
        assert_eq!(StudentService::filter_students(&students, &params), vec![&students[1]]);
    }

    #[test]
    fn test_status_filter() {
        let students = fixture();
        let params = StudentFilterParams {
            search: None,
            status: Some(StudentStatus::Active),
        };
        assert_eq!(StudentService::filter_students(&students, &params), vec![&students[0]]);
    }

    #[test]
    fn test_summarize_students() {
        let mut students = fixture();
        students.push(student("s4", "Nora", "Fassi", None, StudentStatus::Other));
        let stats = StudentService::summarize_students(&students);
        assert_eq!(
            stats,
            StudentStatistics {
                total_students: 4,
                active_students: 1,
                inactive_students: 1,
                left_students: 1,
            }
        );
    }
}
