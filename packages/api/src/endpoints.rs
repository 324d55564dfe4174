// ABOUTME: Path table for every CMS API endpoint, relative to the configured base URL
// ABOUTME: Grouped by resource so call sites read like the REST surface they hit

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
}

pub mod users {
    pub const ALL: &str = "/users";

    pub fn by_id(id: i64) -> String {
        format!("/users/{}", id)
    }
}

pub mod content {
    pub const ALL: &str = "/content";
    pub const MY_HISTORY: &str = "/content/history/my";

    pub fn by_id(id: i64) -> String {
        format!("/content/{}", id)
    }

    pub fn history(id: i64) -> String {
        format!("/content/{}/history", id)
    }

    pub fn user_history(user_id: i64) -> String {
        format!("/content/history/user/{}", user_id)
    }
}

pub mod categories {
    pub const ALL: &str = "/categories";
    pub const PUBLIC: &str = "/categories/public";

    pub fn by_id(id: i64) -> String {
        format!("/categories/{}", id)
    }
}

pub mod subcategories {
    pub const ALL: &str = "/subcategories";

    pub fn by_id(id: i64) -> String {
        format!("/subcategories/{}", id)
    }
}

pub mod projects {
    pub const ALL: &str = "/projects";
    pub const MY_HISTORY: &str = "/projects/history/my";

    pub fn by_id(id: i64) -> String {
        format!("/projects/{}", id)
    }

    pub fn history(id: i64) -> String {
        format!("/projects/{}/history", id)
    }

    pub fn user_history(user_id: i64) -> String {
        format!("/projects/history/user/{}", user_id)
    }
}

pub mod project_statuses {
    pub const ALL: &str = "/project-statuses";
    pub const PUBLIC: &str = "/project-statuses/public";
}

pub mod project_areas {
    pub const ALL: &str = "/project-areas";
    pub const PUBLIC: &str = "/project-areas/public";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_paths() {
        assert_eq!(users::by_id(7), "/users/7");
        assert_eq!(content::history(3), "/content/3/history");
        assert_eq!(content::user_history(2), "/content/history/user/2");
        assert_eq!(projects::user_history(2), "/projects/history/user/2");
        assert_eq!(categories::by_id(1), "/categories/1");
    }
}
