use druid::{
    commands, image, AppDelegate, Command, DelegateCtx, Env, Handled, ImageBuf, Target, WindowId,
};
use reel_core::catalog::{Catalog, CatalogHandle};
use threadpool::ThreadPool;

use crate::{cmd, data::AppState, error::Error, widget::remote_image};

pub struct Delegate {
    main_window: Option<WindowId>,
    image_pool: ThreadPool,
    catalog: CatalogHandle,
}

impl Delegate {
    pub fn new(catalog: CatalogHandle) -> Self {
        const MAX_IMAGE_THREADS: usize = 32;

        Self {
            main_window: None,
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
            catalog,
        }
    }

    pub fn with_main(main_window: WindowId, catalog: CatalogHandle) -> Self {
        let mut this = Self::new(catalog);
        this.main_window.replace(main_window);
        this
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        _data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Some(url) = cmd.get(cmd::OPEN_URL) {
            if let Err(err) = open::that(url) {
                log::error!("failed to open {}: {}", url, err);
            }
            Handled::Yes
        } else if let Handled::Yes = self.command_image(ctx, target, cmd) {
            Handled::Yes
        } else {
            Handled::No
        }
    }

    fn window_removed(
        &mut self,
        id: WindowId,
        _data: &mut AppState,
        _env: &Env,
        ctx: &mut DelegateCtx,
    ) {
        if self.main_window == Some(id) {
            self.main_window.take();
            ctx.submit_command(commands::QUIT_APP);
        }
    }
}

impl Delegate {
    fn command_image(&mut self, ctx: &mut DelegateCtx, target: Target, cmd: &Command) -> Handled {
        if let Some(location) = cmd.get(remote_image::REQUEST_DATA).cloned() {
            let sink = ctx.get_external_handle();
            let catalog = self.catalog.clone();
            self.image_pool.execute(move || {
                let image_buf = match load_image(&*catalog, &location) {
                    Ok(image_buf) => image_buf,
                    Err(err) => {
                        log::warn!("failed to load poster {}: {}", location, err);
                        return;
                    }
                };
                let payload = remote_image::ImagePayload {
                    location,
                    image_buf,
                };
                if let Err(err) = sink.submit_command(remote_image::PROVIDE_DATA, payload, target)
                {
                    log::warn!("dropping poster: {err}");
                }
            });
            Handled::Yes
        } else {
            Handled::No
        }
    }
}

fn load_image(catalog: &dyn Catalog, location: &str) -> Result<ImageBuf, Error> {
    let bytes = catalog.poster(location)?;
    let image = image::load_from_memory(&bytes)?;
    Ok(ImageBuf::from_dynamic_image(image))
}
