use actix_web::test::TestRequest;

const BOUNDARY: &str = "----JobPortalTestBoundary7MA4YWxkTrZu0gW";

pub struct FilePart<'a> {
    pub field: &'a str,
    pub filename: &'a str,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

impl<'a> FilePart<'a> {
    pub fn new(field: &'a str, filename: &'a str, content_type: &'a str, data: &'a [u8]) -> Self {
        Self {
            field,
            filename,
            content_type,
            data,
        }
    }
}

/// Encodes `fields` and an optional file part as a `multipart/form-data` body.
pub fn multipart_request(
    req: TestRequest,
    fields: &[(&str, &str)],
    file: Option<FilePart<'_>>,
) -> TestRequest {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some(file) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                file.field, file.filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
        body.extend_from_slice(file.data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    req.insert_header((
        "Content-Type",
        format!("multipart/form-data; boundary={BOUNDARY}"),
    ))
    .set_payload(body)
}
