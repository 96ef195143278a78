#![allow(dead_code)]

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName};
use linarqa_models::{
    Course, CourseId, Enrollment, EnrollmentStatus, Payment, PaymentStatus, StaffId, StaffMember,
    StaffType, Student, StudentId, StudentStatus,
};
use rust_decimal::Decimal;
use serde_json::json;

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn course(id: &str, capacity: i32, active: bool) -> Course {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Course {id}"),
        "capacity": capacity,
        "active": active,
    }))
    .unwrap()
}

pub fn priced_course(id: &str, title: &str, capacity: i32, price: Decimal) -> Course {
    Course {
        title: title.to_string(),
        monthly_price: price,
        ..course(id, capacity, true)
    }
}

pub fn enrollment(course_id: &str, status: &str) -> Enrollment {
    serde_json::from_value(json!({ "courseId": course_id, "status": status })).unwrap()
}

pub fn payment(amount: Decimal, status: PaymentStatus, due: &str) -> Payment {
    Payment {
        id: Default::default(),
        student_id: Some(StudentId::from("s1")),
        student_name: Some("Amine Benali".to_string()),
        course_id: None,
        course_name: None,
        payment_type: None,
        amount,
        status,
        due_date: date(due),
        paid_date: (status == PaymentStatus::Paid).then(|| date(due)),
    }
}

pub fn staff_member(staff_type: StaffType, salary: Decimal, active: bool) -> StaffMember {
    StaffMember {
        id: StaffId::from(format!("st-{}", (0..1_000_000).fake::<u32>())),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        first_name_arabic: None,
        last_name_arabic: None,
        identity_number: String::new(),
        phone_number: String::new(),
        salary,
        staff_type,
        active,
    }
}

/// Randomized students for property checks.
pub fn fake_students(count: usize) -> Vec<Student> {
    (0..count)
        .map(|i| Student {
            id: StudentId::from(format!("s{i}")),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            first_name_arabic: None,
            last_name_arabic: None,
            birth_date: None,
            status: if Boolean(70).fake() {
                StudentStatus::Active
            } else {
                StudentStatus::Inactive
            },
        })
        .collect()
}

/// Randomized courses with capacities in 0..=5, some inactive.
pub fn fake_courses(count: usize) -> Vec<Course> {
    (0..count)
        .map(|i| Course {
            title: Word().fake(),
            monthly_price: Decimal::from((5..50).fake::<u32>() * 10),
            ..course(&format!("c{i}"), (0..=5).fake::<i32>(), Boolean(80).fake())
        })
        .collect()
}

/// Randomized enrollments spread over `courses`, plus a few orphans.
pub fn fake_enrollments(courses: &[Course], count: usize) -> Vec<Enrollment> {
    (0..count)
        .map(|_| {
            let course_id = if courses.is_empty() || Boolean(10).fake() {
                CourseId::from("orphan")
            } else {
                courses[(0..courses.len()).fake::<usize>()].id.clone()
            };
            Enrollment {
                course_id,
                status: if Boolean(75).fake() {
                    EnrollmentStatus::Active
                } else {
                    EnrollmentStatus::Inactive
                },
                ..enrollment("x", "ACTIVE")
            }
        })
        .collect()
}
