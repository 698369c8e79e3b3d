// Static HTML/CSS assets for the queue admin page

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Queue Admin</title>
    <link rel="stylesheet" type="text/css" href="/styles/main.css" />
</head>
<body>
    <div class="container">
        <div class="header">
            <span class="title">Queues</span>
        </div>
        <div id="dropzone" class="dropzone">
            <p>Drag &amp; Drop your YAML file here or click below</p>
            <label class="button">
                Upload YAML
                <input id="upload" type="file" accept=".yaml, .yml" hidden />
            </label>
        </div>
        <ul id="queues" class="queue-list"></ul>
        <div id="dialog" class="dialog" hidden>
            <div class="dialog-title">
                <span id="dialog-name"></span>
                <button id="dialog-close">&times;</button>
            </div>
            <pre id="dialog-yaml" class="yaml"></pre>
            <textarea id="dialog-editor" class="editor" rows="12" hidden></textarea>
            <div class="dialog-actions">
                <span id="view-actions">
                    <button id="dialog-edit">Edit</button>
                    <button id="dialog-apply">Apply Update</button>
                    <button id="dialog-delete" class="danger">Delete</button>
                    <button id="dialog-done">Close</button>
                </span>
                <span id="edit-actions" hidden>
                    <button id="dialog-save">Save</button>
                </span>
            </div>
        </div>
        <div id="toast" class="toast" hidden></div>
    </div>
    <script>
        const list = document.getElementById('queues');
        const dialog = document.getElementById('dialog');
        const toast = document.getElementById('toast');
        const dropzone = document.getElementById('dropzone');
        const view = document.getElementById('dialog-yaml');
        const editor = document.getElementById('dialog-editor');
        const viewActions = document.getElementById('view-actions');
        const editActions = document.getElementById('edit-actions');
        let current = null;
        let yaml = '';

        function notify(message, isError) {
            toast.textContent = message;
            toast.className = isError ? 'toast error' : 'toast success';
            toast.hidden = false;
            setTimeout(() => { toast.hidden = true; }, 3000);
        }

        async function refresh() {
            const response = await fetch('/api/queues');
            const queues = await response.json();
            list.innerHTML = '';
            for (const queue of queues) {
                const item = document.createElement('li');
                item.textContent = queue.name;
                item.onclick = () => openQueue(queue);
                list.appendChild(item);
            }
        }

        function setEditing(editing) {
            editor.hidden = !editing;
            view.hidden = editing;
            editActions.hidden = !editing;
            viewActions.hidden = editing;
        }

        function openQueue(queue) {
            current = queue.name;
            yaml = queue.yaml;
            document.getElementById('dialog-name').textContent = 'Queue YAML - ' + queue.name;
            view.innerHTML = queue.formatted;
            setEditing(false);
            dialog.hidden = false;
        }

        function closeDialog() {
            dialog.hidden = true;
            setEditing(false);
            current = null;
        }

        async function uploadFile(file) {
            if (!file) return;
            const content = await file.text();
            const response = await fetch('/api/upload', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ file_name: file.name, content })
            });
            const body = await response.json();
            if (response.ok) {
                notify('Queue added successfully!', false);
                refresh();
                openQueue(body);
            } else {
                notify(body.error, true);
            }
        }

        document.getElementById('dialog-close').onclick = closeDialog;
        document.getElementById('dialog-done').onclick = closeDialog;

        document.getElementById('dialog-edit').onclick = () => {
            editor.value = yaml;
            setEditing(true);
        };

        document.getElementById('dialog-save').onclick = async () => {
            yaml = editor.value;
            const response = await fetch('/api/format', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ yaml })
            });
            const body = await response.json();
            if (response.ok) {
                view.innerHTML = body.formatted;
            } else {
                notify(body.error, true);
            }
            setEditing(false);
        };

        document.getElementById('dialog-apply').onclick = async () => {
            if (!yaml || yaml.trim() === '') {
                notify('YAML content cannot be empty!', true);
                return;
            }
            const response = await fetch('/api/queues/' + encodeURIComponent(current), {
                method: 'PUT',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ yaml })
            });
            const body = await response.json();
            if (response.ok) {
                notify('Queue added successfully!', false);
                refresh();
            } else {
                notify(body.error, true);
            }
        };

        document.getElementById('dialog-delete').onclick = async () => {
            const response = await fetch('/api/queues/' + encodeURIComponent(current), { method: 'DELETE' });
            if (response.ok) {
                notify('Queue deleted', false);
                closeDialog();
                refresh();
            } else {
                notify((await response.json()).error, true);
            }
        };

        dropzone.addEventListener('dragover', (event) => {
            event.preventDefault();
            dropzone.classList.add('dragging');
        });
        dropzone.addEventListener('dragleave', () => {
            dropzone.classList.remove('dragging');
        });
        dropzone.addEventListener('drop', (event) => {
            event.preventDefault();
            dropzone.classList.remove('dragging');
            uploadFile(event.dataTransfer.files[0]);
        });

        document.getElementById('upload').onchange = async (event) => {
            await uploadFile(event.target.files[0]);
            event.target.value = '';
        };

        refresh();
    </script>
</body>
</html>
"#;

pub const MAIN_CSS: &str = r#"body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
    background-color: #fafafa;
}

.container {
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
}

.header {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.title {
    font-size: 20px;
    font-weight: bold;
}

.dropzone {
    margin: 16px 0;
    padding: 16px;
    border: 2px dashed #ccc;
    border-radius: 8px;
    text-align: center;
}

.dropzone.dragging {
    border-color: #3f51b5;
    background-color: #f0f0f0;
}

.editor {
    width: 100%;
    font-family: monospace;
    font-size: 1rem;
    box-sizing: border-box;
}

.queue-list li {
    cursor: pointer;
    padding: 8px 0;
}

.dialog {
    background-color: #fff;
    border-radius: 12px;
    padding: 16px;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2);
}

.dialog-title {
    display: flex;
    justify-content: space-between;
    font-weight: bold;
}

.yaml {
    font-family: monospace;
    font-size: 1.2rem;
    white-space: pre-wrap;
    overflow: auto;
    background-color: #f5f5f5;
    padding: 16px;
    border-radius: 4px;
}

.yaml .yaml-key {
    font-weight: 700;
    color: #000;
}

.danger {
    color: #d32f2f;
}

.toast {
    position: fixed;
    bottom: 20px;
    left: 20px;
    padding: 12px 16px;
    border-radius: 4px;
    color: #fff;
}

.toast.success {
    background-color: #2e7d32;
}

.toast.error {
    background-color: #d32f2f;
}
"#;
