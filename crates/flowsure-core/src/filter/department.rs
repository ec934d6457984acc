use crate::domain::{Department, DepartmentRole};
use crate::filter::RoleSelection;

/// Role a lead department is filtered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKey<'a> {
    Role(DepartmentRole),
    Unmapped(&'a str),
}

// Technology, Services and Retail/Manufacturing map onto different role
// names than the action table keys on; the mismatch is kept as observed.
pub fn role_for_department(department: &Department) -> RoleKey<'_> {
    match department {
        Department::Technology => RoleKey::Role(DepartmentRole::Presales),
        Department::Services => RoleKey::Role(DepartmentRole::Delivery),
        Department::Retail | Department::Manufacturing => RoleKey::Role(DepartmentRole::Bd),
        Department::Other(name) => match DepartmentRole::from_exact(name) {
            Some(role) => RoleKey::Role(role),
            None => RoleKey::Unmapped(name),
        },
    }
}

/// A full selection means no restriction; an empty one hides everything.
pub fn department_visible(department: &Department, selection: &RoleSelection) -> bool {
    if selection.is_all() {
        return true;
    }
    match role_for_department(department) {
        RoleKey::Role(role) => selection.contains(role),
        RoleKey::Unmapped(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{role_for_department, RoleKey};
    use crate::domain::{Department, DepartmentRole};

    #[test]
    fn fixed_mapping() {
        assert_eq!(
            role_for_department(&Department::Technology),
            RoleKey::Role(DepartmentRole::Presales)
        );
        assert_eq!(
            role_for_department(&Department::Services),
            RoleKey::Role(DepartmentRole::Delivery)
        );
        assert_eq!(
            role_for_department(&Department::Retail),
            RoleKey::Role(DepartmentRole::Bd)
        );
        assert_eq!(
            role_for_department(&Department::Manufacturing),
            RoleKey::Role(DepartmentRole::Bd)
        );
    }

    #[test]
    fn other_departments_pass_through() {
        let owner = Department::Other("Owner".to_string());
        assert_eq!(
            role_for_department(&owner),
            RoleKey::Role(DepartmentRole::Owner)
        );
        let healthcare = Department::Other("Healthcare".to_string());
        assert_eq!(
            role_for_department(&healthcare),
            RoleKey::Unmapped("Healthcare")
        );
    }
}
