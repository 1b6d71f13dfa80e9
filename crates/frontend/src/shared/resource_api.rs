//! Remote resource client: one set of CRUD calls for every collection,
//! driven by the resource descriptor.

use crate::shared::api_utils::{config, endpoint_url};
use contracts::domain::common::{
    decode_records, multipart_fields, AfterWrite, BodyKind, HttpMethod, Operation, RecordId,
    Resource, ResourceDescriptor, WriteOutcome, WriteRequest,
};
use contracts::shared::error::ResourceError;
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::{File, FormData};

fn request(method: HttpMethod, url: &str) -> RequestBuilder {
    let builder = match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Patch => Request::patch(url),
        HttpMethod::Delete => Request::delete(url),
    };
    builder.header("Accept", "application/json")
}

fn transport(e: gloo_net::Error) -> ResourceError {
    ResourceError::Transport(e.to_string())
}

fn decode(e: gloo_net::Error) -> ResourceError {
    ResourceError::Decode(e.to_string())
}

/// Pass 2xx responses through, turn anything else into a status error
async fn ensure_ok(response: Response) -> Result<Response, ResourceError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ResourceError::from_status(status, &body))
}

async fn send(builder: RequestBuilder) -> Result<Response, ResourceError> {
    ensure_ok(builder.send().await.map_err(transport)?).await
}

/// Fetch the whole collection
pub async fn fetch_all<R: Resource>() -> Result<Vec<R>, ResourceError> {
    let descriptor = R::descriptor();
    let url = endpoint_url(descriptor, Operation::List, None);
    let response = send(request(descriptor.endpoints.list.method, &url)).await?;
    let items: Vec<serde_json::Value> = response.json().await.map_err(decode)?;
    Ok(decode_records(items))
}

/// Fetch the values of `value_field` across another collection, for the
/// select inputs of `owner`. The list is read from the owner's host.
pub async fn fetch_options(
    owner: &'static ResourceDescriptor,
    source: &'static ResourceDescriptor,
    value_field: &str,
) -> Result<Vec<String>, ResourceError> {
    let url = config().options_url(owner, source);
    let response = send(request(source.endpoints.list.method, &url)).await?;
    let items: Vec<serde_json::Value> = response.json().await.map_err(decode)?;
    Ok(items
        .iter()
        .filter_map(|item| item.get(value_field).and_then(|v| v.as_str()))
        .map(str::to_string)
        .collect())
}

fn js_error(e: wasm_bindgen::JsValue) -> ResourceError {
    ResourceError::Encode(format!("{e:?}"))
}

fn multipart_body<R: Resource>(
    draft: &R::Draft,
    attachments: &[File],
) -> Result<FormData, ResourceError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in multipart_fields::<R>(draft) {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    if let Some(field) = R::descriptor().attachment_field() {
        for file in attachments {
            form.append_with_blob_and_filename(field.name, file, &file.name())
                .map_err(js_error)?;
        }
    }
    Ok(form)
}

/// Create or update a record.
///
/// Depending on the descriptor the result is the echoed record or, for
/// resources that refetch, the whole collection read back after the write.
pub async fn write<R: Resource>(
    write_request: &WriteRequest<R::Draft>,
    attachments: &[File],
) -> Result<WriteOutcome<R>, ResourceError> {
    let descriptor = R::descriptor();
    let operation = write_request.operation();
    let url = endpoint_url(descriptor, operation, write_request.id());
    let builder = request(descriptor.endpoints.route(operation).method, &url);

    let prepared = match descriptor.body {
        BodyKind::Json => builder
            .json(write_request.draft())
            .map_err(|e| ResourceError::Encode(e.to_string()))?,
        // Content-Type with the boundary is set by the browser
        BodyKind::Multipart => builder
            .body(multipart_body::<R>(write_request.draft(), attachments)?)
            .map_err(|e| ResourceError::Encode(e.to_string()))?,
    };

    let response = ensure_ok(prepared.send().await.map_err(transport)?).await?;

    match descriptor.after_write {
        AfterWrite::ApplyResponse => response
            .json::<R>()
            .await
            .map(WriteOutcome::Saved)
            .map_err(decode),
        AfterWrite::Refetch => fetch_all::<R>().await.map(WriteOutcome::Reloaded),
    }
}

pub async fn remove<R: Resource>(id: &RecordId) -> Result<(), ResourceError> {
    let descriptor = R::descriptor();
    let url = endpoint_url(descriptor, Operation::Delete, Some(id));
    send(request(descriptor.endpoints.delete.method, &url)).await?;
    Ok(())
}
