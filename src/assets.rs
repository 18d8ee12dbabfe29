use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type ImageSlot = Rc<RefCell<Option<web::HtmlImageElement>>>;

/// Decoded images the render loop draws. Each slot is replaced whole once
/// a new file finishes decoding.
#[derive(Clone, Default)]
pub struct Assets {
    pub background: ImageSlot,
    pub character: ImageSlot,
}

impl Assets {
    /// Clone out the current handles for one frame.
    pub fn snapshot(&self) -> (Option<web::HtmlImageElement>, Option<web::HtmlImageElement>) {
        (
            self.background.borrow().clone(),
            self.character.borrow().clone(),
        )
    }
}

/// True when the image can be drawn this frame.
#[inline]
pub fn is_ready(img: &web::HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0 && img.natural_height() > 0
}

#[inline]
pub fn natural_size(img: &web::HtmlImageElement) -> Vec2 {
    Vec2::new(img.natural_width() as f32, img.natural_height() as f32)
}

async fn decode_file(file: &web::File) -> anyhow::Result<web::HtmlImageElement> {
    let url = web::Url::create_object_url_with_blob(file)
        .map_err(|e| anyhow::anyhow!("object url: {:?}", e))?;
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(&url);
    let decoded = JsFuture::from(img.decode()).await;
    _ = web::Url::revoke_object_url(&url);
    decoded.map_err(|e| anyhow::anyhow!("decode {}: {:?}", file.name(), e))?;
    Ok(img)
}

/// Decode `file` into `slot` in the background, then report its size.
///
/// A failed decode leaves the previous image in place.
pub fn load_image_into(
    file: web::File,
    slot: ImageSlot,
    on_loaded: impl FnOnce(Vec2) + 'static,
) {
    spawn_local(async move {
        match decode_file(&file).await {
            Ok(img) => {
                let size = natural_size(&img);
                log::info!("[assets] loaded {} ({}x{})", file.name(), size.x, size.y);
                *slot.borrow_mut() = Some(img);
                on_loaded(size);
            }
            Err(e) => log::warn!("[assets] {:?}", e),
        }
    });
}
