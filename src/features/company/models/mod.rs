mod company;

pub use company::{Company, CompanyAddress, CompanyEmail, CompanyImage, CompanyPhone};
