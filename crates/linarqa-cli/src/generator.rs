//! Sample dataset generation.
//!
//! Produces a kindergarten and academy dataset with fake French names so the
//! report commands can be tried without a backend export. Records reference
//! each other the way backend exports do: enrollments and extra-course bills
//! point at generated courses and students.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::name::fr_fr::{FirstName, LastName};
use linarqa_core::{MonthKey, PageEnvelope};
use linarqa_models::{
    Course, CourseId, Enrollment, EnrollmentId, EnrollmentStatus, Payment, PaymentId,
    PaymentStatus, StaffId, StaffMember, StaffType, Student, StudentId, StudentStatus,
};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

const COURSE_TITLES: [&str; 8] = [
    "Robotique",
    "Piano",
    "Dessin",
    "Anglais",
    "Échecs",
    "Théâtre",
    "Calcul mental",
    "Natation",
];

const INSTRUCTORS: [&str; 4] = ["Mme Alaoui", "M. Bennani", "Mme Tazi", "M. Idrissi"];

const ARABIC_FIRST_NAMES: [&str; 6] = ["أمين", "سلمى", "يوسف", "مريم", "آدم", "ليلى"];
const ARABIC_LAST_NAMES: [&str; 6] = ["العلوي", "بناني", "التازي", "الإدريسي", "الفاسي", "برادة"];

const MONTHLY_FEE: &str = "MONTHLY";
const REGISTRATION_FEE: &str = "REGISTRATION";

/// How much data to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub students: usize,
    pub courses: usize,
    pub staff: usize,
    /// Calendar year the bills are due in
    pub year: i32,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            students: 40,
            courses: 6,
            staff: 8,
            year: 2024,
        }
    }
}

/// A complete generated dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub kindergarten_payments: Vec<Payment>,
    pub extra_course_payments: Vec<Payment>,
    pub staff: Vec<StaffMember>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn pick<'a>(values: &[&'a str]) -> &'a str {
    values[(0..values.len()).fake::<usize>()]
}

fn generate_student() -> Student {
    let with_arabic: bool = Boolean(70).fake();
    let status = match (0..10).fake::<u8>() {
        0 => StudentStatus::Left,
        1 => StudentStatus::Inactive,
        _ => StudentStatus::Active,
    };

    Student {
        id: StudentId::new(new_id()),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        first_name_arabic: with_arabic.then(|| pick(&ARABIC_FIRST_NAMES).to_string()),
        last_name_arabic: with_arabic.then(|| pick(&ARABIC_LAST_NAMES).to_string()),
        birth_date: NaiveDate::from_ymd_opt(
            (2018..2022).fake::<i32>(),
            (1..=12).fake::<u32>(),
            (1..=28).fake::<u32>(),
        ),
        status,
    }
}

fn generate_course(index: usize) -> Course {
    let title = COURSE_TITLES[index % COURSE_TITLES.len()];
    let title = if index < COURSE_TITLES.len() {
        title.to_string()
    } else {
        format!("{title} {}", index / COURSE_TITLES.len() + 1)
    };

    Course {
        id: CourseId::new(new_id()),
        title,
        description: None,
        monthly_price: Decimal::from((15..=40).fake::<u32>() * 10),
        capacity: (4..=16).fake::<i32>(),
        active: Boolean(85).fake(),
        instructor: Some(pick(&INSTRUCTORS).to_string()),
        schedule: None,
    }
}

fn generate_staff_member() -> StaffMember {
    let staff_type = match (0..3).fake::<u8>() {
        0 => StaffType::Educatrice,
        1 => StaffType::AideEducatrice,
        _ => StaffType::Assistant,
    };
    let base: u32 = match staff_type {
        StaffType::Educatrice => 4000,
        StaffType::AideEducatrice => 3200,
        _ => 2800,
    };

    StaffMember {
        id: StaffId::new(new_id()),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        first_name_arabic: None,
        last_name_arabic: None,
        identity_number: format!(
            "{}{}",
            pick(&["AB", "BK", "CD", "EE"]),
            (100_000..999_999).fake::<u32>()
        ),
        phone_number: format!("06{}", (10_000_000..99_999_999).fake::<u32>()),
        salary: Decimal::from(base + (0..10).fake::<u32>() * 100),
        staff_type,
        active: Boolean(90).fake(),
    }
}

fn random_status() -> PaymentStatus {
    match (0..10).fake::<u8>() {
        0..=5 => PaymentStatus::Paid,
        6 => PaymentStatus::Partial,
        7 => PaymentStatus::Overdue,
        _ => PaymentStatus::Unpaid,
    }
}

fn bill(
    student: &Student,
    amount: Decimal,
    due_date: NaiveDate,
    payment_type: Option<&str>,
    course: Option<&Course>,
) -> Payment {
    let status = random_status();
    let paid_date = (status == PaymentStatus::Paid)
        .then(|| due_date.checked_add_days(Days::new((0..12).fake::<u64>())))
        .flatten();

    Payment {
        id: PaymentId::new(new_id()),
        student_id: Some(student.id.clone()),
        student_name: Some(student.full_name()),
        course_id: course.map(|c| c.id.clone()),
        course_name: course.map(|c| c.title.clone()),
        payment_type: payment_type.map(str::to_string),
        amount,
        status,
        due_date,
        paid_date,
    }
}

fn due_dates(year: i32) -> Vec<NaiveDate> {
    MonthKey::months_of(year)
        .filter_map(|key| NaiveDate::from_ymd_opt(key.year(), key.month(), 5))
        .collect()
}

fn kindergarten_bills(student: &Student, year: i32) -> Vec<Payment> {
    let mut bills: Vec<Payment> = due_dates(year)
        .into_iter()
        .map(|due| bill(student, Decimal::from(800), due, Some(MONTHLY_FEE), None))
        .collect();
    if let Some(september) = NaiveDate::from_ymd_opt(year, 9, 1) {
        bills.push(bill(student, Decimal::from(500), september, Some(REGISTRATION_FEE), None));
    }
    bills
}

fn enroll(student: &Student, course: &Course, year: i32) -> Enrollment {
    let status = match (0..10).fake::<u8>() {
        0 => EnrollmentStatus::Cancelled,
        1 => EnrollmentStatus::Inactive,
        2 => EnrollmentStatus::Completed,
        _ => EnrollmentStatus::Active,
    };
    Enrollment {
        id: EnrollmentId::new(new_id()),
        course_id: course.id.clone(),
        student_id: Some(student.id.clone()),
        student_name: Some(student.full_name()),
        course_title: Some(course.title.clone()),
        status,
        enrollment_date: NaiveDate::from_ymd_opt(year, 1, (1..=28).fake::<u32>()),
    }
}

/// Generates a dataset; students are generated in parallel.
pub fn generate_dataset(config: &GenerateConfig) -> Dataset {
    let start_time = Instant::now();

    let students: Vec<Student> = (0..config.students)
        .into_par_iter()
        .map(|_| generate_student())
        .collect();
    let courses: Vec<Course> = (0..config.courses).map(generate_course).collect();
    let staff: Vec<StaffMember> = (0..config.staff).map(|_| generate_staff_member()).collect();

    let kindergarten_payments: Vec<Payment> = students
        .par_iter()
        .filter(|s| s.status == StudentStatus::Active)
        .flat_map_iter(|s| kindergarten_bills(s, config.year))
        .collect();

    let mut enrollments = Vec::new();
    let mut extra_course_payments = Vec::new();
    if !courses.is_empty() {
        for student in students.iter().filter(|_| Boolean(50).fake::<bool>()) {
            let course = &courses[(0..courses.len()).fake::<usize>()];
            let enrollment = enroll(student, course, config.year);
            if enrollment.is_active() {
                extra_course_payments.extend(
                    due_dates(config.year)
                        .into_iter()
                        .map(|due| bill(student, course.monthly_price, due, None, Some(course))),
                );
            }
            enrollments.push(enrollment);
        }
    }

    info!(
        students = students.len(),
        courses = courses.len(),
        enrollments = enrollments.len(),
        payments = kindergarten_payments.len() + extra_course_payments.len(),
        elapsed = ?start_time.elapsed(),
        "Generated dataset"
    );

    Dataset {
        students,
        courses,
        enrollments,
        kindergarten_payments,
        extra_course_payments,
        staff,
    }
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    let path = dir.join(name);
    let body = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {name}"))?;
    fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Writes one JSON file per collection into `dir`.
///
/// Students are written as a paging envelope, every other collection as a
/// bare array, matching the two shapes the backend returns.
pub fn write_dataset(dir: &Path, dataset: &Dataset) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let total = dataset.students.len() as i64;
    let students = PageEnvelope {
        content: dataset.students.iter().collect::<Vec<_>>(),
        total_elements: Some(total),
        total_pages: Some(1),
        number: Some(0),
        size: Some(total),
    };

    Ok(vec![
        write_json(dir, "students.json", &students)?,
        write_json(dir, "courses.json", &dataset.courses)?,
        write_json(dir, "enrollments.json", &dataset.enrollments)?,
        write_json(dir, "kindergarten-payments.json", &dataset.kindergarten_payments)?,
        write_json(dir, "extra-payments.json", &dataset.extra_course_payments)?,
        write_json(dir, "staff.json", &dataset.staff)?,
    ])
}
