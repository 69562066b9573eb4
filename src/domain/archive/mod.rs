pub mod face_archive;
