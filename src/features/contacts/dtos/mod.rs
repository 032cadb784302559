mod contact_dto;

pub use contact_dto::{
    ContactListDto, ContactResponseDto, CreateContactDto, UpdateContactDto,
};
