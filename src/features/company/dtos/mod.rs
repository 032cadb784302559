mod company_dto;

pub use company_dto::{
    CompanyAddressListDto, CompanyAddressResponseDto, CompanyEmailListDto, CompanyEmailResponseDto,
    CompanyImageListDto, CompanyImageResponseDto, CompanyPhoneListDto, CompanyPhoneResponseDto,
    CompanyResponseDto, CreateCompanyAddressDto, CreateCompanyDto, CreateCompanyEmailDto,
    CreateCompanyPhoneDto, UpdateCompanyAddressDto, UpdateCompanyDto, UpdateCompanyEmailDto,
    UpdateCompanyImageDto, UpdateCompanyPhoneDto,
};
