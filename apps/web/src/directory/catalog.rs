//! Seed content for the directory pages: what a small pilot tenant sees.
//! A production deployment replaces this module with an applicant store.

use crate::models::directory::{
    ActivityItem, Candidate, DashboardStat, HrProfile, JobPosting, NotificationPrefs,
};

pub fn dashboard_stats() -> Vec<DashboardStat> {
    vec![
        DashboardStat {
            title: "Total Candidates".to_string(),
            value: "1,247".to_string(),
            change: "+12%".to_string(),
        },
        DashboardStat {
            title: "Active Job Postings".to_string(),
            value: "23".to_string(),
            change: "+3".to_string(),
        },
        DashboardStat {
            title: "Screening Completed".to_string(),
            value: "89%".to_string(),
            change: "+5%".to_string(),
        },
        DashboardStat {
            title: "Placement Rate".to_string(),
            value: "76%".to_string(),
            change: "+8%".to_string(),
        },
    ]
}

pub fn recent_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            action: "New candidate applied".to_string(),
            subject: "Senior Developer".to_string(),
            time: "2 hours ago".to_string(),
        },
        ActivityItem {
            action: "Interview scheduled".to_string(),
            subject: "Sarah Johnson".to_string(),
            time: "4 hours ago".to_string(),
        },
        ActivityItem {
            action: "Job posting published".to_string(),
            subject: "UI/UX Designer".to_string(),
            time: "1 day ago".to_string(),
        },
        ActivityItem {
            action: "Candidate shortlisted".to_string(),
            subject: "Michael Chen".to_string(),
            time: "2 days ago".to_string(),
        },
    ]
}

pub fn job_postings() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Senior Full Stack Developer".to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            employment_type: "Full-time".to_string(),
            status: "Active".to_string(),
            applicants: 24,
            posted: "3 days ago".to_string(),
            description: "Looking for an experienced developer to join our growing team."
                .to_string(),
        },
        JobPosting {
            id: 2,
            title: "UI/UX Designer".to_string(),
            department: "Design".to_string(),
            location: "New York, NY".to_string(),
            employment_type: "Full-time".to_string(),
            status: "Active".to_string(),
            applicants: 12,
            posted: "1 week ago".to_string(),
            description: "Creative designer needed for our product team.".to_string(),
        },
        JobPosting {
            id: 3,
            title: "Product Manager".to_string(),
            department: "Product".to_string(),
            location: "San Francisco, CA".to_string(),
            employment_type: "Full-time".to_string(),
            status: "Draft".to_string(),
            applicants: 0,
            posted: "2 days ago".to_string(),
            description: "Lead product strategy and development initiatives.".to_string(),
        },
        JobPosting {
            id: 4,
            title: "Data Scientist".to_string(),
            department: "Analytics".to_string(),
            location: "Remote".to_string(),
            employment_type: "Contract".to_string(),
            status: "Active".to_string(),
            applicants: 18,
            posted: "5 days ago".to_string(),
            description: "Analyze complex datasets to drive business insights.".to_string(),
        },
    ]
}

pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: 1,
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            position: "Senior Developer".to_string(),
            location: "New York, NY".to_string(),
            status: "Interview Scheduled".to_string(),
            experience: "5 years".to_string(),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "TypeScript".to_string(),
            ],
        },
        Candidate {
            id: 2,
            name: "Michael Chen".to_string(),
            email: "michael.chen@email.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            position: "UI/UX Designer".to_string(),
            location: "San Francisco, CA".to_string(),
            status: "Under Review".to_string(),
            experience: "3 years".to_string(),
            skills: vec![
                "Figma".to_string(),
                "Adobe XD".to_string(),
                "Prototyping".to_string(),
            ],
        },
        Candidate {
            id: 3,
            name: "Emily Rodriguez".to_string(),
            email: "emily.rodriguez@email.com".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            position: "Product Manager".to_string(),
            location: "Remote".to_string(),
            status: "Shortlisted".to_string(),
            experience: "7 years".to_string(),
            skills: vec![
                "Strategy".to_string(),
                "Analytics".to_string(),
                "Leadership".to_string(),
            ],
        },
        Candidate {
            id: 4,
            name: "David Kim".to_string(),
            email: "david.kim@email.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            position: "Data Scientist".to_string(),
            location: "Boston, MA".to_string(),
            status: "New Application".to_string(),
            experience: "4 years".to_string(),
            skills: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "SQL".to_string(),
            ],
        },
    ]
}

pub fn profile() -> HrProfile {
    HrProfile {
        first_name: "Alex".to_string(),
        last_name: "Greene".to_string(),
        email: "alex.greene@talentflow.com".to_string(),
        title: "HR Manager".to_string(),
    }
}

pub fn notification_prefs() -> NotificationPrefs {
    NotificationPrefs {
        email_notifications: true,
        push_notifications: true,
        weekly_reports: true,
    }
}
